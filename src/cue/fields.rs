//! Value extraction for individual cue directives

/// Frames per second in cue time codes
pub const FRAMES_PER_SECOND: u64 = 75;

/// Case-insensitive keyword match at the start of a line
///
/// Returns the remainder after the keyword.
pub fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        line.get(keyword.len()..)
    } else {
        None
    }
}

/// Extract a directive value
///
/// Text between the first pair of double quotes, or the whole remainder
/// trimmed when the line carries no complete quoted string.
pub fn extract_info(rest: &str) -> String {
    if let Some(left) = rest.find('"') {
        let after = &rest[left + 1..];
        if let Some(right) = after.find('"') {
            return after[..right].to_string();
        }
    }
    rest.trim().to_string()
}

/// Leading integer of a directive value
///
/// `None` when the value is empty or does not start with a digit.
pub fn extract_number(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    // Saturate absurdly long digit runs instead of rejecting them
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Decode the time code of an `INDEX nn mm:ss:ff` remainder into milliseconds
///
/// `rest` is everything after the `INDEX` keyword. The index number is
/// skipped, and the remaining field must be exactly three numeric groups.
pub fn extract_index_time(rest: &str) -> Option<u64> {
    let time = rest
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim();

    let parts: Vec<&str> = time.split(':').collect();
    let [mins, secs, frames] = parts.as_slice() else {
        return None;
    };

    let mins = parse_group(mins)?;
    let secs = parse_group(secs)?;
    let frames = parse_group(frames)?;

    // Out-of-range codes are malformed rather than wrapped
    let seconds = mins.checked_mul(60)?.checked_add(secs)?;
    seconds
        .checked_mul(1000)?
        .checked_add(frames.checked_mul(1000)? / FRAMES_PER_SECOND)
}

fn parse_group(group: &str) -> Option<u64> {
    let group = group.trim();
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}
