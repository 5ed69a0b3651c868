use std::sync::LazyLock;

use regex::Regex;

/// Australian E.164 subset: `+61` followed by a landline/mobile prefix digit
/// in {2,3,4,7,8} and eight more digits, or `+61 1800` toll-free with six
/// more digits. Anchored: the whole string must match, so spaced national
/// forms like `03 8578 6688` are rejected.
static AU_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+61([2-478]\d{8}|1800\d{6})$").expect("valid phone pattern"));

/// Whether `phone` is a well-formed Australian E.164 number.
///
/// Pure function of its input; evaluating it twice on the same string always
/// yields the same answer.
#[must_use]
pub fn is_valid_australian_phone_number(phone: &str) -> bool {
    AU_PHONE.is_match(phone)
}
