//! Tests for reading parsing and statistics building


pub const SEATTLE_LINE: &str = "01-15-2013,16.5,0.3,Seattle,United States,47.42N,122.34W";

/// A valid line for `city` with the given temperature field text
pub fn line_with_temperature(city: &str, temperature: &str) -> String {
    format!("01-15-2013,{},0.3,{},United States,47.42N,122.34W\n", temperature, city)
}
