//! Fixed section bodies. Each body sits between the `[segment:<name>]` line
//! and the end-of-section comment, and is whitespace-significant.

use super::section::SectionKind;

/// URLs with any query string vs. the rest.
pub const PARAMETER_USAGE: &str = "\
@Parameters
query *=*

@Clean
path /*
";

/// Query-string parameter count buckets. Highest first: every pattern also
/// matches queries with more `=` signs than it names.
pub const NO_OF_PARAMETERS: &str = "\
@Home
path /

@5_Parameters
query rx:=(.)+=(.)+=(.)+=(.)+=(.)+

@4_Parameters
query rx:=(.)+=(.)+=(.)+=(.)+

@3_Parameters
query rx:=(.)+=(.)+=(.)+

@2_Parameters
query rx:=(.)+=(.)+

@1_Parameter
query rx:=(.)+

@~Other
path /*
";

/// Path depth buckets, highest first for the same reason.
pub const NO_OF_FOLDERS: &str = "\
@Home
path /

@Folders/5
path rx:^/[^/]+/[^/]+/[^/]+/[^/]+/[^/]+

@Folders/4
path rx:^/[^/]+/[^/]+/[^/]+/[^/]+

@Folders/3
path rx:^/[^/]+/[^/]+/[^/]+

@Folders/2
path rx:^/[^/]+/[^/]+

@Folders/1
path rx:^/[^/]+

@~Other
path /*
";

pub const SFCC: &str = "\
@Home
path /

@SFCC
path */demandware*

@~Other
path /*
";

pub const SHOPIFY: &str = "\
@Home
path /

@PDP/Products/Variants
path */products/*
URL *variant=*

@PDP/Products
path */products/*

@PLP/Collections
path */collections/*

@Pages
path */pages/*

@~Other
path /*
";

const STATIC_EXTENSIONS: &[&str] = &[
    "bmp", "css", "doc", "gif", "ief", "jpe", "jpeg", "jpg", "js", "m1v", "mov", "mp2", "mp3",
    "mp4", "mpa", "mpe", "mpeg", "mpg", "pbm", "pdf", "pgm", "png", "pnm", "ppm", "pps", "ppt",
    "ps", "qt", "ras", "rgb", "swf", "tif", "tiff", "tsv", "txt", "vcf", "wav", "xbm", "xls",
    "xml", "xpdl", "xpm", "xwd",
];

/// Body of the static-resources section: one `or` group over file extensions
/// and API paths.
pub fn static_resources() -> String {
    let mut body = String::from("@true\nor (\n");
    for ext in STATIC_EXTENSIONS {
        body.push_str("path *.");
        body.push_str(ext);
        body.push('\n');
    }
    body.push_str("path */api/*\n)\n\n@~Other\npath /*\n");
    body
}

/// Body for a static section, `None` for data-driven kinds.
pub fn static_body(kind: SectionKind) -> Option<std::borrow::Cow<'static, str>> {
    let body = match kind {
        SectionKind::ParameterUsage => PARAMETER_USAGE,
        SectionKind::NoOfParameters => NO_OF_PARAMETERS,
        SectionKind::NoOfFolders => NO_OF_FOLDERS,
        SectionKind::Sfcc => SFCC,
        SectionKind::Shopify => SHOPIFY,
        SectionKind::StaticResources => return Some(static_resources().into()),
        _ => return None,
    };
    Some(body.into())
}
