#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use rb_step_map::IntervalMap;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Assign(u8, u8, u8),
}

/// One slot per key of `u8`.
struct NaiveMap {
    slots: [u8; 256],
}

impl NaiveMap {
    fn new(value: u8) -> Self {
        Self { slots: [value; 256] }
    }

    fn assign(&mut self, begin: u8, end: u8, value: u8) {
        for slot in &mut self.slots[begin as usize..(end as usize).max(begin as usize)] {
            *slot = value;
        }
    }

    fn runs(&self) -> usize {
        1 + self.slots.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

fuzz_target!(|input: (u8, Vec<Op>)| {
    let (initial, ops) = input;
    let mut map = IntervalMap::new(initial);
    let mut naive = NaiveMap::new(initial);

    for op in ops {
        let Op::Assign(begin, end, value) = op;
        map.assign(begin, end, value);
        naive.assign(begin, end, value);
    }

    for key in u8::MIN..=u8::MAX {
        assert_eq!(map[&key], naive.slots[key as usize]);
    }
    assert_eq!(map.len(), naive.runs());
});
