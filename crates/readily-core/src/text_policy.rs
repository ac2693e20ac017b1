//! Fixed-buffer labels for compact status lines.

use core::str;

/// `mm:ss` label for an elapsed-seconds counter. Minutes keep growing past 99.
pub fn elapsed_label(total_seconds: u32, out: &mut [u8; 12]) -> &str {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let mut len = 0usize;
    if minutes < 10 {
        out[len] = b'0';
        len += 1;
    }
    len += write_u32_ascii(minutes, &mut out[len..]);
    out[len] = b':';
    len += 1;
    out[len] = b'0' + (seconds / 10) as u8;
    out[len + 1] = b'0' + (seconds % 10) as u8;
    len += 2;

    str::from_utf8(&out[..len]).unwrap_or("00:00")
}

/// `current / total` counter label.
pub fn counter_label(current: usize, total: usize, out: &mut [u8; 48]) -> &str {
    let mut len = write_u32_ascii(saturate(current), out);
    out[len..len + 3].copy_from_slice(b" / ");
    len += 3;
    len += write_u32_ascii(saturate(total), &mut out[len..]);
    str::from_utf8(&out[..len]).unwrap_or("")
}

fn saturate(value: usize) -> u32 {
    value.min(u32::MAX as usize) as u32
}

pub fn write_u32_ascii(mut value: u32, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 10];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}
