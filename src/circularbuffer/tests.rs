use super::*;
use bolero::{check, TypeGenerator};
use std::collections::VecDeque;

const CAPACITY: usize = 512;

#[derive(Clone, Copy, Debug, TypeGenerator)]
enum Op {
    Write { amount: u16, skip: u8 },
    Read { amount: u16 },
    Consume { amount: u16 },
    MakeContiguous,
    View,
    Resize { extra: u8 },
    Set { index: i16, value: u8 },
    Clear,
}

#[derive(Debug)]
struct Model {
    oracle: VecDeque<u8>,
    subject: CircularBuffer,
    capacity: usize,
    byte: u8,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            oracle: Default::default(),
            subject: CircularBuffer::new(CAPACITY),
            capacity: CAPACITY,
            byte: 0,
        }
    }
}

impl Model {
    fn apply_all(&mut self, ops: &[Op]) {
        for op in ops {
            self.apply(*op);
        }
    }

    #[inline]
    fn pattern(&mut self, amount: usize, skip: u8) -> Vec<u8> {
        // a small alphabet so searches actually hit
        let base = self.byte as usize + skip as usize;
        let bytes = (b'a'..=b'd').cycle().skip(base).take(amount).collect();
        self.byte = (base + amount) as u8;
        bytes
    }

    fn apply(&mut self, op: Op) {
        match op {
            Op::Write { amount, skip } => {
                let data = self.pattern(amount as usize, skip);
                let expected = data.len().min(self.capacity - self.oracle.len());

                assert_eq!(self.subject.write(&data), expected);
                self.oracle.extend(&data[..expected]);
            }
            Op::Read { amount } => {
                let expected = self.oracle.len().min(amount as usize);
                let read = self.subject.read(amount as usize);
                let oracle: Vec<u8> = self.oracle.drain(..expected).collect();
                assert_eq!(read, oracle);
            }
            Op::Consume { amount } => {
                let expected = self.oracle.len().min(amount as usize);
                assert_eq!(self.subject.consume(amount as usize), expected);
                self.oracle.drain(..expected);
            }
            Op::MakeContiguous => {
                let once = self.subject.make_contiguous().to_vec();
                let twice = self.subject.make_contiguous().to_vec();
                assert_eq!(once, twice);
                assert_eq!(self.subject.head, 0);
            }
            Op::View => {
                let view = self.subject.acquire_contiguous_view();
                assert!(view.iter().eq(self.oracle.iter()));
            }
            Op::Resize { extra } => {
                let requested = self.capacity + extra as usize;
                assert_eq!(self.subject.resize(requested), requested);
                self.capacity = requested;
                // shrinking is a no-op
                assert_eq!(self.subject.resize(CAPACITY), requested);
            }
            Op::Set { index, value } => {
                let index = index as isize;
                let result = self.subject.set(index, value);
                let len = self.oracle.len() as isize;
                let resolved = if index < 0 { index + len } else { index };
                if resolved >= 0 && resolved < len {
                    assert!(result.is_ok());
                    self.oracle[resolved as usize] = value;
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Clear => {
                self.subject.clear();
                self.oracle.clear();
            }
        }

        self.invariants();
    }

    fn invariants(&mut self) {
        assert_eq!(self.subject.len(), self.oracle.len());
        assert_eq!(self.subject.capacity(), self.capacity);
        assert_eq!(self.subject.len() + self.subject.write_available(),
                   self.subject.capacity());

        let subject = {
            let (head, tail) = self.subject.as_slices();
            head.iter().chain(tail)
        };
        let oracle = {
            let (head, tail) = self.oracle.as_slices();
            head.iter().chain(tail)
        };

        assert!(subject.eq(oracle),
                "subject ({:?}) == oracle ({:?})",
                self.subject,
                self.oracle);

        let flat: Vec<u8> = self.oracle.iter().cloned().collect();
        for pattern in [&b"ab"[..], b"da", b"cdab", b"aa"].iter() {
            let expected = flat.windows(pattern.len()).position(|w| w == *pattern);
            assert_eq!(self.subject.find(pattern, 0), Ok(expected));
            assert_eq!(self.subject.contains(pattern), expected.is_some());
            assert_eq!(self.subject.starts_with(pattern), flat.starts_with(pattern));
            assert_eq!(self.subject.count(pattern), Ok(greedy_count(&flat, pattern)));
        }
    }
}

/// Non-overlapping occurrences of `pattern`, scanning left to right.
fn greedy_count(bytes: &[u8], pattern: &[u8]) -> usize {
    let mut count = 0;
    let mut at = 0;
    while at + pattern.len() <= bytes.len() {
        if &bytes[at..at + pattern.len()] == pattern {
            count += 1;
            at += pattern.len();
        } else {
            at += 1;
        }
    }
    count
}

#[test]
fn model_test() {
    check!().with_type::<Vec<Op>>().for_each(|ops| {
        let mut model = Model::default();
        model.apply_all(ops);
    })
}

#[test]
fn count_matches_greedy_scan() {
    check!().with_type::<(u8, Vec<u8>)>().for_each(|(offset, input)| {
        let input: Vec<u8> = input.iter().map(|b| b'a' + b % 2).collect();
        let mut buf = CircularBuffer::new(input.len().max(1));
        if let Some((first, rest)) = input.split_first() {
            // rotate the write position so the content wraps
            let offset = *offset as usize % buf.capacity();
            buf.write(&vec![0; offset]);
            buf.write(&[*first]);
            buf.consume(offset);
            buf.write(rest);
        }
        assert_eq!(buf, &input[..]);

        for pattern in [&b"a"[..], b"ab", b"aa", b"aba"].iter() {
            assert_eq!(buf.count(pattern), Ok(greedy_count(&input, pattern)));
        }
    })
}
