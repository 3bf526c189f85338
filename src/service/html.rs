//! HTML fragment generation.
//!
//! Every string produced here is part of the wire-format contract: pages
//! are compared byte-for-byte by existing clients and tests, so the
//! literal markup (line breaks included) must not drift.

/// Fixed document head with the given page title.
pub fn head(title: &str) -> String {
    format!(
        "<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <style>body{{background-color: #f0f0f0;}}</style>\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"https://maxcdn.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css\">\n\
         </head>\n",
        title
    )
}

/// Document body: `content` nested inside one div per presentation class.
pub fn body(content: &str, classes: &[&str]) -> String {
    let mut out = String::from("<body>\n");
    for class in classes {
        out.push_str(&format!("<div class=\"{}\">\n", class));
    }
    out.push_str(content);
    out.push('\n');
    for _ in classes {
        out.push_str("</div>\n");
    }
    out.push_str("</body>\n");
    out
}

/// Document footer with author, license and version lines.
///
/// Each class is followed by a trailing space inside the attribute;
/// clients match on the exact attribute text.
pub fn footer(author: &str, license: &str, version: &str, classes: &[&str]) -> String {
    let mut out = String::from("<footer class=\"");
    for class in classes {
        out.push_str(class);
        out.push(' ');
    }
    out.push_str("\">\n");
    out.push_str(&format!("Made by {}\n", author));
    out.push_str(&format!("License: {}\n", license));
    out.push_str(&format!("Version: {}\n", version));
    out.push_str("</footer>\n");
    out
}

/// Doctype plus `<html lang="en">` wrapper around `inner`.
pub fn wrapper(inner: &str) -> String {
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", inner)
}
