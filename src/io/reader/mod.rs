/*! Reading utilities

Input files hold one identifier per line, see [IdReader].
!*/
mod idreader;

pub use idreader::IdReader;
