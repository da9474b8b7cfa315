//! Korean-locale number formatting for fee amounts

/// Format a won amount with thousands separators and the 원 suffix,
/// e.g. `1234567` → `"1,234,567원"`.
pub fn format_won(amount: u64) -> String {
	format!("{}원", group_digits(amount))
}

/// Comma-group a number without the currency suffix.
pub fn group_digits(amount: u64) -> String {
	let digits = amount.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}
