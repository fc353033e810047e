#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Physical offset one past the last logical byte.
#[inline]
pub fn tail(head: usize, len: usize, capacity: usize) -> usize {
    if capacity == 0 {
        0
    } else {
        wrap_add(head, len, capacity)
    }
}

/// Clamps a `[start, end)` request against `len`. Inverted ranges become
/// empty.
#[inline]
pub fn clamp_range(start: usize, end: usize, len: usize) -> (usize, usize) {
    let end = end.min(len);
    let start = start.min(end);
    (start, end)
}

/// Resolves a possibly negative sequence index against `len`.
#[inline]
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index.checked_add(len as isize)?
    } else {
        index
    };
    if resolved >= 0 && (resolved as usize) < len {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Adjusts extended slice bounds the way ordinary sequence slicing does and
/// returns `(start, slice_len)`. `step` must be non-zero.
pub fn adjust_slice(start: Option<isize>, stop: Option<isize>, step: isize, len: usize) -> (isize, usize) {
    debug_assert!(step != 0);
    let len = len as isize;

    let clamp = |bound: isize| -> isize {
        if bound < 0 {
            let bound = bound + len;
            if bound < 0 {
                if step < 0 { -1 } else { 0 }
            } else {
                bound
            }
        } else if bound >= len {
            if step < 0 { len - 1 } else { len }
        } else {
            bound
        }
    };

    let (start, stop) = if step > 0 {
        (start.map_or(0, &clamp), stop.map_or(len, &clamp))
    } else {
        (start.map_or(len - 1, &clamp), stop.map_or(-1, &clamp))
    };

    let count = if step < 0 {
        if stop < start {
            (start - stop - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        }
    } else if start < stop {
        (stop - start - 1) as usize / step.unsigned_abs() + 1
    } else {
        0
    };

    (start, count)
}
