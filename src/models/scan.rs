use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Raw scanner output: 8-bit RGB per square, keyed by 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanData {
    squares: BTreeMap<usize, [u8; 3]>,
}

/// Accepts either `{"1": [r, g, b], ...}` or a flat array of triples.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScan {
    Keyed(HashMap<String, [u8; 3]>),
    Ordered(Vec<[u8; 3]>),
}

impl ScanData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse scanner JSON.
    ///
    /// Keys must be positive integers. A JSON array is read as positions
    /// 1, 2, 3, ... in order.
    pub fn from_json(input: &str) -> Result<Self, ConfigurationError> {
        let raw: RawScan = serde_json::from_str(input)
            .map_err(|e| ConfigurationError::MalformedScan(e.to_string()))?;

        match raw {
            RawScan::Ordered(values) => Ok(values
                .into_iter()
                .enumerate()
                .map(|(i, rgb)| (i + 1, rgb))
                .collect()),
            RawScan::Keyed(values) => {
                let mut scan = Self::new();
                for (key, rgb) in values {
                    let position = key
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|&p| p > 0)
                        .ok_or_else(|| ConfigurationError::InvalidPosition(key.clone()))?;
                    scan.insert(position, rgb);
                }
                Ok(scan)
            }
        }
    }

    pub fn insert(&mut self, position: usize, rgb: [u8; 3]) {
        self.squares.insert(position, rgb);
    }

    pub fn get(&self, position: usize) -> Option<[u8; 3]> {
        self.squares.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Squares in position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, [u8; 3])> + '_ {
        self.squares.iter().map(|(&p, &rgb)| (p, rgb))
    }
}

impl FromIterator<(usize, [u8; 3])> for ScanData {
    fn from_iter<I: IntoIterator<Item = (usize, [u8; 3])>>(iter: I) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_json() {
        let scan = ScanData::from_json(r#"{"1": [235, 254, 250], "2": [20, 105, 74]}"#).unwrap();
        assert_eq!(scan.len(), 2);
        assert_eq!(scan.get(1), Some([235, 254, 250]));
        assert_eq!(scan.get(2), Some([20, 105, 74]));
    }

    #[test]
    fn test_array_json() {
        let scan = ScanData::from_json("[[1, 2, 3], [4, 5, 6]]").unwrap();
        assert_eq!(scan.get(1), Some([1, 2, 3]));
        assert_eq!(scan.get(2), Some([4, 5, 6]));
    }

    #[test]
    fn test_invalid_position() {
        assert_eq!(
            ScanData::from_json(r#"{"zero": [0, 0, 0]}"#),
            Err(ConfigurationError::InvalidPosition("zero".to_string()))
        );
        assert_eq!(
            ScanData::from_json(r#"{"0": [0, 0, 0]}"#),
            Err(ConfigurationError::InvalidPosition("0".to_string()))
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ScanData::from_json(r#"{"1": [256, 0, 0]}"#),
            Err(ConfigurationError::MalformedScan(_))
        ));
        assert!(matches!(
            ScanData::from_json("not json"),
            Err(ConfigurationError::MalformedScan(_))
        ));
    }

    #[test]
    fn test_iter_in_position_order() {
        let scan: ScanData = [(3, [3, 3, 3]), (1, [1, 1, 1]), (2, [2, 2, 2])]
            .into_iter()
            .collect();
        let positions: Vec<usize> = scan.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
