//! Composite operations.

/// Porter-Duff composite operations, named as in `globalCompositeOperation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOperation {
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    Copy,
    Xor,
}

impl From<CompositeOperation> for tiny_skia::BlendMode {
    fn from(op: CompositeOperation) -> Self {
        match op {
            CompositeOperation::SourceOver => tiny_skia::BlendMode::SourceOver,
            CompositeOperation::SourceIn => tiny_skia::BlendMode::SourceIn,
            CompositeOperation::SourceOut => tiny_skia::BlendMode::SourceOut,
            CompositeOperation::SourceAtop => tiny_skia::BlendMode::SourceAtop,
            CompositeOperation::DestinationOver => tiny_skia::BlendMode::DestinationOver,
            CompositeOperation::DestinationIn => tiny_skia::BlendMode::DestinationIn,
            CompositeOperation::DestinationOut => tiny_skia::BlendMode::DestinationOut,
            CompositeOperation::DestinationAtop => tiny_skia::BlendMode::DestinationAtop,
            CompositeOperation::Copy => tiny_skia::BlendMode::Source,
            CompositeOperation::Xor => tiny_skia::BlendMode::Xor,
        }
    }
}
