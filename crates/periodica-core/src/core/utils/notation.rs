const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

pub fn to_subscript(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|d| d.to_digit(10).map_or(d, |i| SUBSCRIPT_DIGITS[i as usize]))
        .collect()
}

/// Hill-order formula with subscript counts: carbon first, then hydrogen,
/// then the rest alphabetically; without carbon, everything is alphabetical.
/// Repeated symbols are merged and a count of one is left implicit.
pub fn hill_formula<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut merged: Vec<(&str, u32)> = Vec::new();
    for (symbol, count) in parts {
        match merged.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, total)) => *total += count,
            None => merged.push((symbol, count)),
        }
    }

    let has_carbon = merged.iter().any(|(s, _)| *s == "C");
    let rank = |symbol: &str| match (has_carbon, symbol) {
        (true, "C") => 0,
        (true, "H") => 1,
        _ => 2,
    };
    merged.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    merged
        .into_iter()
        .map(|(symbol, count)| match count {
            1 => symbol.to_string(),
            n => format!("{symbol}{}", to_subscript(n)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscripts() {
        assert_eq!(to_subscript(2), "₂");
        assert_eq!(to_subscript(12), "₁₂");
    }

    #[test]
    fn water_without_carbon_is_alphabetical() {
        assert_eq!(hill_formula([("O", 1), ("H", 2)]), "H₂O");
    }

    #[test]
    fn carbon_leads_then_hydrogen() {
        assert_eq!(hill_formula([("O", 1), ("H", 6), ("C", 2)]), "C₂H₆O");
        assert_eq!(hill_formula([("O", 2), ("C", 1)]), "CO₂");
    }

    #[test]
    fn repeated_symbols_merge() {
        assert_eq!(hill_formula([("H", 1), ("Cl", 1), ("H", 1)]), "ClH₂");
    }
}
