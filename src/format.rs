// src/format.rs

/// Render a population count with a comma every three digits: 1234567 → "1,234,567".
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Like [`format_population`], but an absent value renders as "".
pub fn format_population_opt(population: Option<u64>) -> String {
    population.map(format_population).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(7), "7");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(100_000), "100,000");
        assert_eq!(format_population(1_234_567), "1,234,567");
        assert_eq!(format_population(39_237_836), "39,237,836");
        assert_eq!(format_population(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_absent() {
        assert_eq!(format_population_opt(None), "");
        assert_eq!(format_population_opt(Some(576_851)), "576,851");
    }
}
