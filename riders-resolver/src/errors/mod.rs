mod resolver;

pub use resolver::ResolverError;
