mod builder;
mod constructors;
mod conversions;

pub(crate) use self::builder::build_view_parts;
