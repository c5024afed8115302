/// Estimate whole minutes to read `word_count` words at `words_per_minute`.
///
/// The fractional minute is scaled by 0.60 (not 60) and rounded to two
/// places; the result rounds up once that value reaches 0.30, i.e. at half
/// a minute of remaining text.
pub fn reading_minutes(word_count: u32, words_per_minute: u32) -> u32 {
    let ratio = f64::from(word_count) / f64::from(words_per_minute);
    let minutes = ratio.floor();
    let seconds_fraction = round2((ratio - minutes) * 0.60);

    if seconds_fraction >= 0.30 {
        minutes as u32 + 1
    } else {
        minutes as u32
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
