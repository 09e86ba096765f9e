use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Lookup,
    ListAll,
    Histogram,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("not a number")]
    NotANumber,
    #[error("no menu entry {0}")]
    OutOfRange(i64),
}

/// Parse the leading integer of an operator token as a menu selection.
///
/// Returns the parse outcome together with the unread rest of the token, so
/// `2x` selects entry 2 and leaves `x` for the next read. A token with no
/// leading digits, or whose digits overflow `i64`, is `NotANumber`; integers
/// outside 1..=4 are `OutOfRange`.
pub fn parse_choice(raw: &str) -> (Result<MenuChoice, ChoiceError>, &str) {
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digit_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return (Err(ChoiceError::NotANumber), raw);
    }

    let (number, rest) = raw.split_at(sign_len + digit_len);
    let choice = match number.parse::<i64>() {
        Ok(1) => Ok(MenuChoice::Lookup),
        Ok(2) => Ok(MenuChoice::ListAll),
        Ok(3) => Ok(MenuChoice::Histogram),
        Ok(4) => Ok(MenuChoice::Exit),
        Ok(other) => Err(ChoiceError::OutOfRange(other)),
        Err(_) => Err(ChoiceError::NotANumber),
    };
    (choice, rest)
}
