#![no_main]

use endiancodec::{decode, encode, Endian, Reader, Writer};
use libfuzzer_sys::fuzz_target;

// The first byte drives the sequence of widths and byte orders popped from the rest.
fuzz_target!(|data: &[u8]| {
    let Some((&script, body)) = data.split_first() else {
        return;
    };

    let mut reader = Reader::new(body);
    let mut echo = vec![0u8; body.len()];
    let mut writer = Writer::new(&mut echo);
    let mut step = 0_u32;

    while reader.has_more_data() {
        let order = if (script >> (step % 8)) & 1 == 1 {
            Endian::Big
        } else {
            Endian::Little
        };
        let before = reader.pos();

        let pushed = match step % 4 {
            0 => reader.pop::<u8>(order).map(|v| writer.push(v, order)),
            1 => reader.pop::<u16>(order).map(|v| writer.push(v, order)),
            2 => reader.pop::<u32>(order).map(|v| writer.push(v, order)),
            _ => reader.pop::<u64>(order).map(|v| writer.push(v, order)),
        };

        match pushed {
            Ok(push) => push.expect("echo buffer mirrors the input length"),
            Err(_) => {
                assert_eq!(reader.pos(), before);
                writer.write_bytes(reader.rest()).expect("echo buffer has room for the tail");
                break;
            }
        }
        step += 1;
    }

    assert_eq!(writer.written(), body);

    if body.len() >= 8 {
        let (value, _) = decode::<u64>(body, Endian::Big).expect("eight bytes available");
        let mut again = [0u8; 8];
        encode(&mut again, value, Endian::Big).expect("eight bytes available");
        assert_eq!(&again, &body[..8]);
    }
});
