// Citation cross-references: hover previews and click-to-quote navigation.
// The render adapter implements `AnchorHost`; everything else lives here.

pub mod anchors;
pub mod controller;
pub mod emphasis;

#[cfg(test)]
pub(crate) mod test_support;
