// ============================================================================
// Formatage des montants
// ============================================================================
// Petits helpers partagés par les écrans pour afficher prix et montants
// de manière lisible (séparateurs de milliers, nombre de décimales variable).
// ============================================================================

/// Ajoute des séparateurs de milliers à la partie entière
///
/// Ex : "1234567" -> "1,234,567". Le signe éventuel est conservé.
pub fn group_thousands(whole: &str) -> String {
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

/// Formate un prix avec 2 à 4 décimales et séparateurs de milliers
///
/// Les zéros de fin au-delà de la 2e décimale sont retirés :
/// 0.123456 -> "0.1235", 12.5 -> "12.50", 64250.0 -> "64,250.00"
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let (whole, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0000"));

    let mut decimals = decimals.to_string();
    while decimals.len() > 2 && decimals.ends_with('0') {
        decimals.pop();
    }

    format!("{}.{}", group_thousands(whole), decimals)
}

/// Formate un montant avec exactement 2 décimales et séparateurs de milliers
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    match fixed.split_once('.') {
        Some((whole, decimals)) => format!("{}.{}", group_thousands(whole), decimals),
        None => fixed,
    }
}

/// Formate un grand nombre en notation compacte (K, M, B, T)
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (threshold, suffix) in UNITS {
        if value.abs() >= threshold {
            return format!("{:.2}{}", value / threshold, suffix);
        }
    }

    format!("{:.2}", value)
}
