//! Common definition file fixtures for tests.

#![allow(dead_code)]

pub const PROPERTIES_ONLY: &str = "headers = zlib.h\nheaderFilter = zlib.h\nlinkerOpts = -lz\n";

pub const ZLIB_DEF: &str = r#"headers = zlib.h
headerFilter = zlib.h
compilerOpts.osx = -I/usr/local/include
linkerOpts = -lz
---
static inline int zlib_ok(void) {
    return Z_OK;
}
"#;

pub const ZLIB_PROPERTIES: &str = r#"headers = zlib.h
headerFilter = zlib.h
compilerOpts.osx = -I/usr/local/include
linkerOpts = -lz"#;

pub const ZLIB_DECLARATIONS: &str = r#"static inline int zlib_ok(void) {
    return Z_OK;
}
"#;

/// Second half containing a decrement chain that looks like a delimiter
pub const DASHES_IN_DECLARATIONS: &str = "headers = a.h\n---\nint f(int x) {\n    return x---1;\n}\n---\n";

pub const CRLF_DEF: &str = "headers = win.h\r\n---\r\nvoid WINAPI f(void);\r\n";
