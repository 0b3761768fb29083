#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use rb_step_map::IntervalMap;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Assign(u8, u8, u8),
}

impl Op {
    fn apply(self, map: &mut IntervalMap<u8, u8>) {
        match self {
            Op::Assign(begin, end, value) => map.assign(begin, end, value),
        }
    }
}

fuzz_target!(|input: (u8, Vec<Op>)| {
    let (initial, ops) = input;
    let mut map = IntervalMap::new(initial);

    for op in ops {
        op.apply(&mut map);
    }

    let mut peek = map.iter().peekable();
    assert_eq!(peek.peek().map(|(k, _)| **k), Some(u8::MIN));
    while let Some((key, val)) = peek.next() {
        if let Some((nextkey, nextval)) = peek.peek() {
            if key >= *nextkey || val == *nextval {
                panic!()
            }
        }
    }
});
