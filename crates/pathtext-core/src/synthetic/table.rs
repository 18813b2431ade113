//! Built-in glyph outlines on a 20×20 unit grid (y grows downward).
//!
//! Capitals sit between y=2 and the baseline at y=18; lowercase letters have their x-height at
//! y=8 and descend to y=20. Counters (the holes in `A`, `o`, ...) are separate subpaths and rely
//! on the `evenodd` fill rule.

pub const GRID_SIZE: f64 = 20.0;

/// Outline for `ch` exactly as given; `None` when the table has no entry.
///
/// Space has an entry with empty path data.
pub fn outline(ch: char) -> Option<&'static str> {
    let d = match ch {
        ' ' => "",

        'A' => "M2 18L8.5 2L11.5 2L18 18L15.2 18L13.6 14L6.4 14L4.8 18Z M7.2 11.5L12.8 11.5L10 4.6Z",
        'B' => "M3 2L12 2C16 2 16.5 9.5 13.5 9.8C17 10.2 17 18 12 18L3 18Z M5.8 4.5L11.5 4.5C13.5 4.5 13.5 8.6 11.5 8.6L5.8 8.6Z M5.8 11L12 11C14.2 11 14.2 15.5 12 15.5L5.8 15.5Z",
        'C' => "M17 5.5C15.5 3 13.5 2 10.5 2C5.5 2 2.5 5.5 2.5 10C2.5 14.5 5.5 18 10.5 18C13.5 18 15.5 17 17 14.5L14.8 13.3C13.8 14.8 12.5 15.5 10.5 15.5C7.2 15.5 5.2 13.2 5.2 10C5.2 6.8 7.2 4.5 10.5 4.5C12.5 4.5 13.8 5.2 14.8 6.7Z",
        'D' => "M3 2L9.5 2C14.5 2 17.5 5.5 17.5 10C17.5 14.5 14.5 18 9.5 18L3 18Z M5.8 4.5L9.5 4.5C12.8 4.5 14.8 6.8 14.8 10C14.8 13.2 12.8 15.5 9.5 15.5L5.8 15.5Z",
        'E' => "M3 2L16 2L16 4.5L5.8 4.5L5.8 8.8L14.5 8.8L14.5 11.2L5.8 11.2L5.8 15.5L16.5 15.5L16.5 18L3 18Z",
        'F' => "M3 2L16 2L16 4.5L5.8 4.5L5.8 8.8L14.5 8.8L14.5 11.2L5.8 11.2L5.8 18L3 18Z",
        'G' => "M17 5.5C15.5 3 13.5 2 10.5 2C5.5 2 2.5 5.5 2.5 10C2.5 14.5 5.5 18 10.5 18C13.5 18 15.8 17 17.5 15.2L17.5 9.5L10.5 9.5L10.5 12L15 12L15 14.2C13.8 15.1 12.3 15.5 10.5 15.5C7.2 15.5 5.2 13.2 5.2 10C5.2 6.8 7.2 4.5 10.5 4.5C12.5 4.5 13.8 5.2 14.8 6.7Z",
        'H' => "M3 2L5.8 2L5.8 8.8L14.2 8.8L14.2 2L17 2L17 18L14.2 18L14.2 11.2L5.8 11.2L5.8 18L3 18Z",
        'I' => "M6 2L14 2L14 4.5L11.4 4.5L11.4 15.5L14 15.5L14 18L6 18L6 15.5L8.6 15.5L8.6 4.5L6 4.5Z",
        'J' => "M9 2L16 2L16 12.5C16 16 14 18 10 18C6.5 18 4 16.2 3.8 12.8L6.6 12.5C6.8 14.5 8 15.5 10 15.5C12.2 15.5 13.2 14.5 13.2 12.3L13.2 4.5L9 4.5Z",
        'K' => "M3 2L5.8 2L5.8 9.2L13.5 2L17.2 2L9.8 8.8L17.5 18L14 18L7.9 10.6L5.8 12.5L5.8 18L3 18Z",
        'L' => "M3 2L5.8 2L5.8 15.5L16 15.5L16 18L3 18Z",
        'M' => "M2.5 2L6 2L10 12.5L14 2L17.5 2L17.5 18L15 18L15 7L11.2 17L8.8 17L5 7L5 18L2.5 18Z",
        'N' => "M3 2L5.9 2L14.4 13.6L14.4 2L17 2L17 18L14.1 18L5.6 6.4L5.6 18L3 18Z",
        'O' => "M10 2C14.7 2 17.5 5.5 17.5 10C17.5 14.5 14.7 18 10 18C5.3 18 2.5 14.5 2.5 10C2.5 5.5 5.3 2 10 2Z M10 4.5C7.1 4.5 5.2 6.7 5.2 10C5.2 13.3 7.1 15.5 10 15.5C12.9 15.5 14.8 13.3 14.8 10C14.8 6.7 12.9 4.5 10 4.5Z",
        'P' => "M3 2L11 2C14.8 2 16.8 4.2 16.8 7.2C16.8 10.2 14.8 12.4 11 12.4L5.8 12.4L5.8 18L3 18Z M5.8 4.5L11 4.5C13 4.5 14 5.6 14 7.2C14 8.8 13 9.9 11 9.9L5.8 9.9Z",
        'Q' => "M10 2C14.7 2 17.5 5.5 17.5 10C17.5 14.5 14.7 18 10 18C5.3 18 2.5 14.5 2.5 10C2.5 5.5 5.3 2 10 2Z M10 4.5C7.1 4.5 5.2 6.7 5.2 10C5.2 13.3 7.1 15.5 10 15.5C12.9 15.5 14.8 13.3 14.8 10C14.8 6.7 12.9 4.5 10 4.5Z M15.4 17L17 15.4L19.2 17.6L17.6 19.2Z",
        'R' => "M3 2L11 2C14.8 2 16.8 4.2 16.8 7.2C16.8 9.6 15.5 11.4 13.2 12.1L17.5 18L14.3 18L10.4 12.4L5.8 12.4L5.8 18L3 18Z M5.8 4.5L11 4.5C13 4.5 14 5.6 14 7.2C14 8.8 13 9.9 11 9.9L5.8 9.9Z",
        'S' => "M16.2 5.8C15.2 3.3 13 2 10 2C6.2 2 3.6 4 3.6 7C3.6 10.2 6.3 11 9.8 11.6C12.4 12.1 13.6 12.6 13.6 14C13.6 15 12.4 15.6 10.2 15.6C7.8 15.6 6.3 14.8 5.6 13L3.2 14.2C4.3 16.8 6.8 18 10.2 18C14 18 16.4 16.4 16.4 13.6C16.4 10.4 13.7 9.5 10.2 8.9C7.6 8.4 6.4 8 6.4 6.8C6.4 5.2 7.9 4.4 10 4.4C12 4.4 13.2 5.1 13.8 6.8Z",
        'T' => "M2.5 2L17.5 2L17.5 4.5L11.4 4.5L11.4 18L8.6 18L8.6 4.5L2.5 4.5Z",
        'U' => "M3 2L5.8 2L5.8 12C5.8 14.4 7.4 15.5 10 15.5C12.6 15.5 14.2 14.4 14.2 12L14.2 2L17 2L17 12C17 16 14.4 18 10 18C5.6 18 3 16 3 12Z",
        'V' => "M2 2L5 2L10 14.8L15 2L18 2L11.5 18L8.5 18Z",
        'W' => "M1 2L3.8 2L6.2 13.5L8.8 2L11.2 2L13.8 13.5L16.2 2L19 2L15.2 18L12.6 18L10 7.2L7.4 18L4.8 18Z",
        'X' => "M2.5 2L5.8 2L10 8L14.2 2L17.5 2L11.7 10L17.5 18L14.2 18L10 12L5.8 18L2.5 18L8.3 10Z",
        'Y' => "M2 2L5.2 2L10 9.2L14.8 2L18 2L11.4 11.6L11.4 18L8.6 18L8.6 11.6Z",
        'Z' => "M3 2L17 2L17 4.5L6.6 15.5L17 15.5L17 18L3 18L3 15.5L13.4 4.5L3 4.5Z",

        'a' => "M14.5 8L14.5 18L12.2 18L12.2 16.8C11.3 17.7 10.2 18.2 8.8 18.2C5.8 18.2 4 16.2 4 13.1C4 10 5.8 7.8 8.8 7.8C10.2 7.8 11.3 8.3 12.2 9.2L12.2 8Z M9.2 10.2C7.5 10.2 6.5 11.4 6.5 13.1C6.5 14.8 7.5 15.8 9.2 15.8C10.9 15.8 12.2 14.8 12.2 13.1C12.2 11.4 10.9 10.2 9.2 10.2Z",
        'b' => "M4.5 2L6.8 2L6.8 9.2C7.7 8.3 8.8 7.8 10.2 7.8C13.2 7.8 15 10 15 13.1C15 16.2 13.2 18.2 10.2 18.2C8.8 18.2 7.7 17.7 6.8 16.8L6.8 18L4.5 18Z M9.8 10.2C8.1 10.2 6.8 11.4 6.8 13.1C6.8 14.8 8.1 15.8 9.8 15.8C11.5 15.8 12.5 14.8 12.5 13.1C12.5 11.4 11.5 10.2 9.8 10.2Z",
        'c' => "M14.8 10.2C14 8.6 12.6 7.8 10.6 7.8C7.2 7.8 5 10.1 5 13C5 15.9 7.2 18.2 10.6 18.2C12.6 18.2 14 17.4 14.8 15.8L12.8 14.8C12.3 15.6 11.6 16 10.6 16C8.7 16 7.4 14.8 7.4 13C7.4 11.2 8.7 10 10.6 10C11.6 10 12.3 10.4 12.8 11.2Z",
        'd' => "M15.5 2L13.2 2L13.2 9.2C12.3 8.3 11.2 7.8 9.8 7.8C6.8 7.8 5 10 5 13.1C5 16.2 6.8 18.2 9.8 18.2C11.2 18.2 12.3 17.7 13.2 16.8L13.2 18L15.5 18Z M10.2 10.2C11.9 10.2 13.2 11.4 13.2 13.1C13.2 14.8 11.9 15.8 10.2 15.8C8.5 15.8 7.5 14.8 7.5 13.1C7.5 11.4 8.5 10.2 10.2 10.2Z",
        'e' => "M15 13.8L7.5 13.8C7.8 15.2 8.9 16 10.5 16C11.6 16 12.4 15.6 13 14.9L14.7 16.2C13.7 17.5 12.3 18.2 10.4 18.2C7.1 18.2 5 16 5 13C5 10 7.1 7.8 10.2 7.8C13.2 7.8 15 9.8 15 12.8Z M7.6 11.8L12.5 11.8C12.2 10.6 11.4 9.9 10.1 9.9C8.8 9.9 7.9 10.6 7.6 11.8Z",
        'f' => "M8 18L8 10.2L5.5 10.2L5.5 8L8 8L8 6C8 3.4 9.4 2 12 2C12.9 2 13.7 2.1 14.5 2.4L14.1 4.5C13.5 4.3 12.9 4.2 12.3 4.2C10.9 4.2 10.4 4.9 10.4 6.3L10.4 8L13.5 8L13.5 10.2L10.4 10.2L10.4 18Z",
        'g' => "M14.5 8L14.5 17.5C14.5 19.3 13 20 10 20C7.6 20 6 19.4 5.2 18.2L7 17C7.6 17.6 8.6 17.9 10 17.9C11.6 17.9 12.2 17.5 12.2 16.8L12.2 16.2C11.3 17.1 10.2 17.6 8.8 17.6C5.8 17.6 4 15.6 4 12.7C4 9.8 5.8 7.8 8.8 7.8C10.2 7.8 11.3 8.3 12.2 9.2L12.2 8Z M9.2 10.1C7.5 10.1 6.5 11.2 6.5 12.7C6.5 14.2 7.5 15.3 9.2 15.3C10.9 15.3 12.2 14.2 12.2 12.7C12.2 11.2 10.9 10.1 9.2 10.1Z",
        'h' => "M4.5 2L6.8 2L6.8 9.3C7.7 8.3 8.9 7.8 10.4 7.8C13 7.8 14.5 9.4 14.5 12L14.5 18L12.2 18L12.2 12.3C12.2 10.9 11.5 10.1 10.1 10.1C8.1 10.1 6.8 11.4 6.8 13.3L6.8 18L4.5 18Z",
        'i' => "M8.8 8L11.2 8L11.2 18L8.8 18Z M8.7 3L11.3 3L11.3 5.6L8.7 5.6Z",
        'j' => "M10.6 8L13 8L13 17.6C13 19.2 12 20 10.2 20L7.5 20L7.5 17.8L9.8 17.8C10.4 17.8 10.6 17.5 10.6 16.9Z M10.5 3L13.1 3L13.1 5.6L10.5 5.6Z",
        'k' => "M4.5 2L6.8 2L6.8 12.4L11.8 8L15 8L10.3 12L15.3 18L12.4 18L8.6 13.4L6.8 15L6.8 18L4.5 18Z",
        'l' => "M8.8 2L11.2 2L11.2 18L8.8 18Z",
        'm' => "M2.5 8L4.7 8L4.7 9.1C5.4 8.3 6.3 7.8 7.4 7.8C8.7 7.8 9.6 8.4 10.1 9.3C10.9 8.3 12 7.8 13.2 7.8C15.4 7.8 17.5 9 17.5 12L17.5 18L15.2 18L15.2 12.2C15.2 10.8 14.5 10.1 13.3 10.1C12 10.1 11.1 11.1 11.1 12.6L11.1 18L8.9 18L8.9 12.2C8.9 10.8 8.2 10.1 7 10.1C5.7 10.1 4.8 11.1 4.8 12.6L4.8 18L2.5 18Z",
        'n' => "M4.5 8L6.8 8L6.8 9.3C7.7 8.3 8.9 7.8 10.4 7.8C13 7.8 14.5 9.4 14.5 12L14.5 18L12.2 18L12.2 12.3C12.2 10.9 11.5 10.1 10.1 10.1C8.1 10.1 6.8 11.4 6.8 13.3L6.8 18L4.5 18Z",
        'o' => "M10 7.8C13.1 7.8 15.2 10 15.2 13C15.2 16 13.1 18.2 10 18.2C6.9 18.2 4.8 16 4.8 13C4.8 10 6.9 7.8 10 7.8Z M10 10C8.3 10 7.2 11.2 7.2 13C7.2 14.8 8.3 16 10 16C11.7 16 12.8 14.8 12.8 13C12.8 11.2 11.7 10 10 10Z",
        'p' => "M4.5 8L6.8 8L6.8 9.2C7.7 8.3 8.8 7.8 10.2 7.8C13.2 7.8 15 10 15 12.9C15 15.8 13.2 17.8 10.2 17.8C8.8 17.8 7.7 17.3 6.8 16.4L6.8 20L4.5 20Z M9.8 10.1C8.1 10.1 6.8 11.2 6.8 12.9C6.8 14.5 8.1 15.6 9.8 15.6C11.5 15.6 12.5 14.5 12.5 12.9C12.5 11.2 11.5 10.1 9.8 10.1Z",
        'q' => "M15.5 8L13.2 8L13.2 9.2C12.3 8.3 11.2 7.8 9.8 7.8C6.8 7.8 5 10 5 12.9C5 15.8 6.8 17.8 9.8 17.8C11.2 17.8 12.3 17.3 13.2 16.4L13.2 20L15.5 20Z M10.2 10.1C11.9 10.1 13.2 11.2 13.2 12.9C13.2 14.5 11.9 15.6 10.2 15.6C8.5 15.6 7.5 14.5 7.5 12.9C7.5 11.2 8.5 10.1 10.2 10.1Z",
        'r' => "M5.5 8L7.8 8L7.8 9.6C8.7 8.4 10 7.8 11.6 7.8C12.3 7.8 13 7.9 13.6 8.2L13.1 10.5C12.6 10.3 12.1 10.2 11.6 10.2C9.3 10.2 7.8 11.7 7.8 14L7.8 18L5.5 18Z",
        's' => "M14.2 10.1C13.5 8.6 12.1 7.8 10 7.8C7.2 7.8 5.5 9.1 5.5 11C5.5 13.1 7.3 13.6 9.6 14C11.3 14.3 12.1 14.5 12.1 15.2C12.1 15.8 11.4 16.1 10.1 16.1C8.6 16.1 7.6 15.6 7 14.5L5 15.5C5.8 17.3 7.6 18.2 10.1 18.2C12.9 18.2 14.6 17 14.6 15C14.6 12.8 12.8 12.2 10.5 11.8C8.8 11.5 8 11.3 8 10.7C8 10.1 8.7 9.9 9.9 9.9C11.1 9.9 11.9 10.3 12.3 11.1Z",
        't' => "M8 4.5L10.4 4.5L10.4 8L13.5 8L13.5 10.2L10.4 10.2L10.4 15C10.4 15.7 10.8 16 11.5 16L13.5 16L13.5 18L11 18C9 18 8 17 8 15.2L8 10.2L5.8 10.2L5.8 8L8 8Z",
        'u' => "M4.5 8L6.8 8L6.8 13.7C6.8 15.1 7.5 15.9 8.9 15.9C10.9 15.9 12.2 14.6 12.2 12.7L12.2 8L14.5 8L14.5 18L12.2 18L12.2 16.7C11.3 17.7 10.1 18.2 8.6 18.2C6 18.2 4.5 16.6 4.5 14Z",
        'v' => "M4 8L6.5 8L10 15.3L13.5 8L16 8L11.2 18L8.8 18Z",
        'w' => "M2 8L4.4 8L6.3 15L8.6 8L11.4 8L13.7 15L15.6 8L18 8L14.9 18L12.5 18L10 10.9L7.5 18L5.1 18Z",
        'x' => "M4.5 8L7.3 8L10 11.6L12.7 8L15.5 8L11.5 13L15.5 18L12.7 18L10 14.4L7.3 18L4.5 18L8.5 13Z",
        'y' => "M4 8L6.5 8L10.1 15.2L13.5 8L16 8L10.2 20L7.7 20L8.9 17.6Z",
        'z' => "M5 8L15 8L15 10L8.3 15.8L15 15.8L15 18L5 18L5 16L11.7 10.2L5 10.2Z",

        _ => return None,
    };
    Some(d)
}

/// Outline used for `ch`: exact entry, then the uppercase form, else blank.
pub fn lookup(ch: char) -> &'static str {
    if let Some(d) = outline(ch) {
        return d;
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => outline(u).unwrap_or(""),
        _ => "",
    }
}
