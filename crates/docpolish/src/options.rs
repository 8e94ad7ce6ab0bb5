// ABOUTME: Processor configuration: pass toggles and the sort binding.
// ABOUTME: ProcessorBuilder provides a fluent API for constructing Processor instances.

use crate::processor::Processor;
use crate::sort::{SortBinding, TablesortBinding};

/// Pass toggles for a [`Processor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Run the link normalizer on the first document-ready of each session.
    pub normalize_links: bool,
    /// Run the table sorter on every document-ready.
    pub sort_tables: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            normalize_links: true,
            sort_tables: true,
        }
    }
}

/// Builder for constructing Processor instances with custom configuration.
pub struct ProcessorBuilder {
    opts: Options,
    binding: Option<Box<dyn SortBinding>>,
}

impl ProcessorBuilder {
    /// Create a new ProcessorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
            binding: None,
        }
    }

    /// Enable or disable the link normalizer.
    pub fn normalize_links(mut self, on: bool) -> Self {
        self.opts.normalize_links = on;
        self
    }

    /// Enable or disable the table sorter.
    pub fn sort_tables(mut self, on: bool) -> Self {
        self.opts.sort_tables = on;
        self
    }

    /// Use a custom sort binding instead of the bundled tablesort wiring.
    pub fn binding(mut self, binding: impl SortBinding + 'static) -> Self {
        self.binding = Some(Box::new(binding));
        self
    }

    /// Build the Processor with the configured options.
    pub fn build(self) -> Processor {
        let binding = self
            .binding
            .unwrap_or_else(|| Box::new(TablesortBinding));
        Processor::new(self.opts, binding)
    }
}

impl Default for ProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_enable_both_passes() {
        let opts = Options::default();
        assert!(opts.normalize_links);
        assert!(opts.sort_tables);
    }

    #[test]
    fn builder_overrides_stick() {
        let processor = ProcessorBuilder::new()
            .normalize_links(false)
            .sort_tables(false)
            .build();
        assert_eq!(
            processor.options(),
            Options {
                normalize_links: false,
                sort_tables: false,
            }
        );
    }
}
