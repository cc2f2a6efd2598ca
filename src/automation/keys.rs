//! Key name vocabulary.
//!
//! Maps common key names (`esc`, `enter`, `f5`, `a`, ...) to
//! Windows virtual-key codes. Names are case-insensitive.

/// Returns the virtual-key code for a key name, or `None` if unknown.
pub fn virtual_key_code(name: &str) -> Option<u16> {
    let name = name.to_ascii_lowercase();

    // Single letters and digits map to their uppercase ASCII code
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() {
            return Some(c.to_ascii_uppercase() as u16);
        }
        if c.is_ascii_digit() {
            return Some(c as u16);
        }
    }

    // F1..F24
    if let Some(n) = name.strip_prefix('f').and_then(|n| n.parse::<u16>().ok()) {
        if (1..=24).contains(&n) {
            return Some(0x70 + n - 1);
        }
    }

    let code = match name.as_str() {
        "backspace" => 0x08,
        "tab" | "\t" => 0x09,
        "clear" => 0x0C,
        "enter" | "return" | "\n" | "\r" => 0x0D,
        "shift" | "shiftleft" => 0xA0,
        "shiftright" => 0xA1,
        "ctrl" | "ctrlleft" => 0xA2,
        "ctrlright" => 0xA3,
        "alt" | "altleft" => 0xA4,
        "altright" => 0xA5,
        "pause" => 0x13,
        "capslock" => 0x14,
        "esc" | "escape" => 0x1B,
        "space" | " " => 0x20,
        "pageup" | "pgup" => 0x21,
        "pagedown" | "pgdn" => 0x22,
        "end" => 0x23,
        "home" => 0x24,
        "left" => 0x25,
        "up" => 0x26,
        "right" => 0x27,
        "down" => 0x28,
        "printscreen" | "prtsc" | "prtscr" | "prntscrn" => 0x2C,
        "insert" => 0x2D,
        "delete" | "del" => 0x2E,
        "win" | "winleft" => 0x5B,
        "winright" => 0x5C,
        "num0" => 0x60,
        "num1" => 0x61,
        "num2" => 0x62,
        "num3" => 0x63,
        "num4" => 0x64,
        "num5" => 0x65,
        "num6" => 0x66,
        "num7" => 0x67,
        "num8" => 0x68,
        "num9" => 0x69,
        "multiply" => 0x6A,
        "add" => 0x6B,
        "subtract" => 0x6D,
        "decimal" => 0x6E,
        "divide" => 0x6F,
        "numlock" => 0x90,
        "scrolllock" => 0x91,
        _ => return None,
    };
    Some(code)
}
