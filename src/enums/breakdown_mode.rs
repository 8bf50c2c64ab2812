use crate::common::*;

#[doc = r#"
    Selection strategy of the breakdown panel.

    `RealDistribution` shares out the actual dataset rows. Datasets with
    fewer than three rows render a fixed demo distribution instead
    (`PlaceholderDistribution`), so the panel keeps a meaningful shape on
    tiny inputs. The mode is recorded on the panel so consumers can tell
    the two apart.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakdownMode {
    RealDistribution,
    PlaceholderDistribution,
}
