/// Words per minute, rounded to the nearest whole word.
/// Zero until any time has elapsed.
pub fn words_per_minute(words: u32, elapsed_seconds: f64) -> u32 {
    if elapsed_seconds <= 0.0 {
        return 0;
    }
    let minutes = elapsed_seconds / 60.0;
    (words as f64 / minutes).round() as u32
}
