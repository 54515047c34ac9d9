#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate nmea_fix;

use std::io::Cursor;
use nmea_fix::{render, FixParser};

fuzz_target!(|data: &[u8]| {
    let parser = FixParser::new(Cursor::new(data));

    for fix in parser {
        if let Ok(fix) = fix {
            let _ = render(&fix);
        }
    }
});
