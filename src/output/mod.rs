pub mod formatter;

pub use formatter::{
    format_assessment_table, format_scale_detail, format_tsv, should_use_colors,
};
