/// Converts native script readings into Latin transliterations
pub trait Romanizer: Send + Sync {
    fn to_romaji(&self, text: &str) -> String;

    /// Romanize each reading, keeping order
    fn romanize_all(&self, readings: &[String]) -> Vec<String> {
        readings.iter().map(|r| self.to_romaji(r)).collect()
    }
}
