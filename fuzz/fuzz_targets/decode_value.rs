#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtfile::{from_bytes_with_opts, DecodeOpts, Tag, Value};

// Lists stay homogeneous and unnamed, compound members stay named.
fn check(v: &Value) {
    match v {
        Value::List(_, list) => {
            for e in list {
                assert_eq!(e.tag(), list.element());
                assert!(e.name().is_none());
                check(e);
            }
        }
        Value::Compound(_, compound) => {
            for m in compound {
                assert!(m.name().is_some());
                assert_ne!(m.tag(), Tag::End);
                check(m);
            }
        }
        _ => {}
    }
}

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOpts::new().max_depth(64).max_seq_len(4096);
    if let Ok(v) = from_bytes_with_opts(data, opts) {
        check(&v);
    }
});
