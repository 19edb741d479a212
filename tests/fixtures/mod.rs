#![allow(dead_code)]
//! Shared inputs for integration tests: SMAP texts and hand-assembled class
//! files.

/// A single JSP stratum mapping ten output lines to `foo.jsp` line 1.
pub const JSP_SMAP: &str = "SMAP\nFoo.java\nJSP\n*S JSP\n*F\n1 foo.jsp\n*L\n1:1,10\n*E\n";

/// Two strata with an absolute path, a vendor section and a repeat count.
pub const MULTI_STRATUM_SMAP: &str = "SMAP\n\
index_jsp.java\n\
JSP\n\
*S JSP\n\
*F\n\
+ 1 index.jsp\n\
web/index.jsp\n\
2 header.jsp\n\
*L\n\
1,5:20\n\
7#2,2:40,3\n\
10#1:60\n\
*S Tpl\n\
*F\n\
1 index.tpl\n\
*L\n\
1:20,40\n\
*V\n\
org.example.tool\n\
opaque vendor data\n\
*E\n";

/// A SMAP with two embedded SMAPs for the JSP stratum.
pub const EMBEDDED_SMAP: &str = "SMAP\n\
Outer.java\n\
JSP\n\
*O JSP\n\
SMAP\n\
Inner.jsp\n\
Tpl\n\
*S Tpl\n\
*F\n\
1 in.tpl\n\
*L\n\
1:1\n\
*E\n\
SMAP\n\
Other.jsp\n\
Tpl\n\
*S Tpl\n\
*F\n\
1 other.tpl\n\
*L\n\
1:2\n\
*E\n\
*C JSP\n\
*S JSP\n\
*F\n\
1 a.jsp\n\
*L\n\
1:1\n\
*E\n";

fn utf8(out: &mut Vec<u8>, value: &str) {
    out.push(1);
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}

/// Assemble a minimal class file `Foo` whose only class attribute is named
/// `attribute_name` and carries `payload`.
pub fn class_with_attribute(attribute_name: &str, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&52u16.to_be_bytes());

    // #1 Foo, #2 Class Foo, #3 java/lang/Object, #4 Class Object,
    // #5 attribute name, #6-7 a long constant
    out.extend_from_slice(&8u16.to_be_bytes());
    utf8(&mut out, "Foo");
    out.push(7);
    out.extend_from_slice(&1u16.to_be_bytes());
    utf8(&mut out, "java/lang/Object");
    out.push(7);
    out.extend_from_slice(&3u16.to_be_bytes());
    utf8(&mut out, attribute_name);
    out.push(5);
    out.extend_from_slice(&42u64.to_be_bytes());

    out.extend_from_slice(&0x0021u16.to_be_bytes());
    out.extend_from_slice(&2u16.to_be_bytes());
    out.extend_from_slice(&4u16.to_be_bytes());
    // interfaces, fields, methods
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());

    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&5u16.to_be_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// A class file carrying `smap` as its SourceDebugExtension.
pub fn class_with_smap(smap: &str) -> Vec<u8> {
    class_with_attribute("SourceDebugExtension", smap.as_bytes())
}
