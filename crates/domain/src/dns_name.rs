use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// A domain name as an ordered list of labels.
///
/// Labels are opaque byte strings. A `.` inside a label is legal on the wire,
/// so the dotted presentation form is only produced for display and parsed at
/// the edges (configuration, tests), never used as the stored form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    pub const MAX_LABEL_LEN: usize = 63;
    pub const MAX_ENCODED_LEN: usize = 255;

    /// The root name: no labels, encoded as a single zero byte.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a dotted presentation name such as `codecrafters.io` or
    /// `example.com.`. `""` and `"."` give the root name.
    pub fn from_ascii(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let name = Self::from_labels(trimmed.split('.').map(str::as_bytes));
        name.validate()?;
        Ok(name)
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn push_label(&mut self, label: impl Into<Vec<u8>>) {
        self.labels.push(label.into());
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire form, terminator included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }

    /// Checks every label is 1-63 bytes and the whole name fits in 255.
    pub fn validate(&self) -> Result<(), DomainError> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(DomainError::EmptyLabel);
            }
            if label.len() > Self::MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong(label.len()));
            }
        }

        let len = self.encoded_len();
        if len > Self::MAX_ENCODED_LEN {
            return Err(DomainError::NameTooLong(len));
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for &b in label {
                match b {
                    b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                    0x21..=0x7E => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
        }
        Ok(())
    }
}
