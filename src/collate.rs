//! Czech collation for group names and item labels, backed by ICU4X `cs`
//! data compiled into the binary.
use anyhow::{Context, Result};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use std::cmp::Ordering;

/// Collator built once per invocation and shared by every sort.
#[derive(Debug)]
pub struct CzechCollator {
    inner: CollatorBorrowed<'static>,
}

impl CzechCollator {
    pub fn new() -> Result<Self> {
        let inner = Collator::try_new(locale!("cs").into(), CollatorOptions::default())
            .context("load Czech collation data")?;
        Ok(Self { inner })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b)
    }
}
