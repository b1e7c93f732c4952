use core::fmt;

use super::types::*;
use super::{DataFrame, List, Obj, OptionNA, Vector};

/// Options that control how values are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Console width used to wrap vectors and matrices
    pub width: usize,
    /// Significant digits shown for doubles
    pub digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            width: 80,
            digits: 7,
        }
    }
}

fn trim_decimal_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// Format a double with at most `digits` significant digits
///
/// Scientific notation (`1e+05`, `1e-05`) is used when it is narrower
/// than fixed notation.
///
pub fn format_double(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }

    if x.is_infinite() {
        return if x > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    if x == 0.0 {
        return "0".to_string();
    }

    let digits = digits.clamp(1, 22);
    let sci = format!("{:.*e}", digits - 1, x);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let sign = if exponent < 0 { '-' } else { '+' };
    let scientific = format!(
        "{}e{}{:02}",
        trim_decimal_zeros(mantissa),
        sign,
        exponent.abs()
    );

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let fixed = trim_decimal_zeros(&format!("{:.*}", decimals, x));

    // fixed notation wins ties
    if width(&fixed) > width(&scientific) {
        scientific
    } else {
        fixed
    }
}

/// Format doubles so that fixed-notation values share their decimals
fn format_doubles(values: &[Double], digits: usize) -> Vec<String> {
    let formatted: Vec<String> = values
        .iter()
        .map(|x| match x {
            OptionNA::Some(x) => format_double(*x, digits),
            OptionNA::NA => "NA".to_string(),
        })
        .collect();

    if formatted.iter().any(|s| s.contains('e')) {
        return formatted;
    }

    let decimals = formatted
        .iter()
        .filter_map(|s| s.split_once('.').map(|(_, d)| d.len()))
        .max()
        .unwrap_or(0);

    values
        .iter()
        .zip(formatted)
        .map(|(x, s)| match x {
            OptionNA::Some(x) if x.is_finite() && decimals > 0 => format!("{:.*}", decimals, x),
            _ => s,
        })
        .collect()
}

fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t");
    format!("\"{escaped}\"")
}

/// Format each element of a vector
///
/// With `quoted`, strings are quoted and `NA` strings print as `NA`;
/// otherwise strings print raw and `NA` strings print as `<NA>`.
///
pub fn format_elements(x: &Vector, opts: &FormatOptions, quoted: bool) -> Vec<String> {
    match x {
        Vector::Double(v) => format_doubles(v.values(), opts.digits),
        Vector::Integer(v) => v
            .iter()
            .map(|x| match x {
                OptionNA::Some(x) => x.to_string(),
                OptionNA::NA => "NA".to_string(),
            })
            .collect(),
        Vector::Logical(v) => v
            .iter()
            .map(|x| match x {
                OptionNA::Some(true) => "TRUE".to_string(),
                OptionNA::Some(false) => "FALSE".to_string(),
                OptionNA::NA => "NA".to_string(),
            })
            .collect(),
        Vector::Character(v) => v
            .iter()
            .map(|x| match (x, quoted) {
                (OptionNA::Some(s), true) => quote(s),
                (OptionNA::Some(s), false) => s.clone(),
                (OptionNA::NA, true) => "NA".to_string(),
                (OptionNA::NA, false) => "<NA>".to_string(),
            })
            .collect(),
    }
}

fn format_name(name: &Character) -> String {
    match name {
        OptionNA::Some(s) => s.clone(),
        OptionNA::NA => "<NA>".to_string(),
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{}", " ".repeat(w.saturating_sub(width(s))), s)
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{}{}", s, " ".repeat(w.saturating_sub(width(s))))
}

fn format_unnamed(elements: &[String], opts: &FormatOptions) -> String {
    let n = elements.len();
    let label_width = width(&format!("[{n}]"));
    let item_width = elements.iter().map(|s| width(s)).max().unwrap_or(0);
    let per_line = ((opts.width.saturating_sub(label_width)) / (item_width + 1)).max(1);

    let mut lines = vec![];
    for (line, chunk) in elements.chunks(per_line).enumerate() {
        let label = pad_left(&format!("[{}]", line * per_line + 1), label_width);
        let items: Vec<String> = chunk.iter().map(|s| pad_left(s, item_width)).collect();
        lines.push(format!("{label} {}", items.join(" ")));
    }

    lines.join("\n")
}

fn format_named(elements: &[String], names: &[Character], opts: &FormatOptions) -> String {
    let names: Vec<String> = names.iter().map(format_name).collect();
    let w = elements
        .iter()
        .chain(names.iter())
        .map(|s| width(s))
        .max()
        .unwrap_or(0);

    let per_line = (opts.width / (w + 1)).max(1);

    let mut lines = vec![];
    for (values, names) in elements.chunks(per_line).zip(names.chunks(per_line)) {
        let header: String = names.iter().map(|s| format!("{} ", pad_left(s, w))).collect();
        let row: String = values.iter().map(|s| format!("{} ", pad_left(s, w))).collect();
        lines.push(header);
        lines.push(row);
    }

    lines.join("\n")
}

fn format_vector(x: &Vector, opts: &FormatOptions) -> String {
    if let Some(dims) = x.dims() {
        if dims.ndim() >= 2 {
            let elements = format_elements(x, opts, true);
            let left = x.mode() == Mode::Character;
            return format_array(&elements, dims, left, opts);
        }
    }

    let names = x
        .names()
        .map(<[Character]>::to_vec)
        .or_else(|| x.dims().and_then(|d| d.axis_names(0)).map(<[Character]>::to_vec));

    if x.is_empty() {
        let prefix = if names.is_some() { "named " } else { "" };
        return format!("{prefix}{}(0)", x.mode().empty_name());
    }

    let elements = format_elements(x, opts, true);
    match names {
        Some(names) => format_named(&elements, &names, opts),
        None => format_unnamed(&elements, opts),
    }
}

/// Format a two-axis grid of cells with row and column labels
fn format_grid(
    cells: &[String],
    row_labels: &[String],
    col_labels: &[String],
    left: bool,
    opts: &FormatOptions,
) -> String {
    let nrow = row_labels.len();
    let label_width = row_labels.iter().map(|s| width(s)).max().unwrap_or(0);

    let col_widths: Vec<usize> = col_labels
        .iter()
        .enumerate()
        .map(|(j, label)| {
            cells[j * nrow..(j + 1) * nrow]
                .iter()
                .map(|s| width(s))
                .chain(std::iter::once(width(label)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // split columns into blocks that fit the console width
    let mut blocks: Vec<Vec<usize>> = vec![vec![]];
    let mut used = label_width;
    for (j, w) in col_widths.iter().enumerate() {
        let current = blocks.len() - 1;
        if !blocks[current].is_empty() && used + w + 1 > opts.width {
            blocks.push(vec![]);
            used = label_width;
        }
        let current = blocks.len() - 1;
        blocks[current].push(j);
        used += w + 1;
    }

    let align = |s: &str, w: usize| if left { pad_right(s, w) } else { pad_left(s, w) };

    let mut lines = vec![];
    for block in blocks {
        let header: String = block
            .iter()
            .map(|&j| format!(" {}", align(&col_labels[j], col_widths[j])))
            .collect();
        lines.push(format!("{}{}", " ".repeat(label_width), header));

        for (i, label) in row_labels.iter().enumerate() {
            let row: String = block
                .iter()
                .map(|&j| format!(" {}", align(&cells[j * nrow + i], col_widths[j])))
                .collect();
            lines.push(format!("{}{}", pad_right(label, label_width), row));
        }
    }

    lines.join("\n")
}

fn format_matrix(
    cells: &[String],
    nrow: usize,
    ncol: usize,
    row_names: Option<&[Character]>,
    col_names: Option<&[Character]>,
    left: bool,
    opts: &FormatOptions,
) -> String {
    if nrow == 0 || ncol == 0 {
        return format!("<{nrow} x {ncol} matrix>");
    }

    let row_labels: Vec<String> = match row_names {
        Some(names) => names.iter().map(format_name).collect(),
        None => (1..=nrow).map(|i| format!("[{i},]")).collect(),
    };

    let col_labels: Vec<String> = match col_names {
        Some(names) => names.iter().map(format_name).collect(),
        None => (1..=ncol).map(|j| format!("[,{j}]")).collect(),
    };

    format_grid(cells, &row_labels, &col_labels, left, opts)
}

fn format_array(cells: &[String], dims: &super::Dims, left: bool, opts: &FormatOptions) -> String {
    let (nrow, ncol) = (dims.extents[0], dims.extents[1]);
    let slice_len = nrow * ncol;
    let higher = &dims.extents[2..];

    if higher.is_empty() {
        return format_matrix(
            cells,
            nrow,
            ncol,
            dims.axis_names(0),
            dims.axis_names(1),
            left,
            opts,
        );
    }

    let nslices: usize = higher.iter().product();
    if nslices == 0 || slice_len == 0 {
        let extents: Vec<String> = dims.extents.iter().map(|e| e.to_string()).collect();
        return format!("<{} array>", extents.join(" x "));
    }

    let mut out = vec![];
    let mut coords = vec![0; higher.len()];
    for k in 0..nslices {
        let labels: Vec<String> = coords
            .iter()
            .enumerate()
            .map(|(axis, &i)| match dims.axis_names(axis + 2) {
                Some(names) => format_name(&names[i]),
                None => (i + 1).to_string(),
            })
            .collect();

        let slice = &cells[k * slice_len..(k + 1) * slice_len];
        out.push(format!(", , {}\n", labels.join(", ")));
        out.push(format_matrix(
            slice,
            nrow,
            ncol,
            dims.axis_names(0),
            dims.axis_names(1),
            left,
            opts,
        ));
        out.push(String::new());

        // advance the higher-axis coordinate, first axis fastest
        for (coord, extent) in coords.iter_mut().zip(higher) {
            *coord += 1;
            if *coord < *extent {
                break;
            }
            *coord = 0;
        }
    }

    out.join("\n")
}

fn format_cell(x: &Obj, opts: &FormatOptions) -> String {
    match x {
        Obj::Null => "NULL".to_string(),
        Obj::Vector(v) => format_elements(v, opts, false).join(", "),
        other => other.format(opts).replace('\n', " "),
    }
}

fn format_data_frame(df: &DataFrame, opts: &FormatOptions) -> String {
    let names: Vec<String> = df.column_names().iter().map(format_name).collect();

    if df.ncol() == 0 {
        return format!("data frame with 0 columns and {} rows", df.nrow());
    }

    if df.nrow() == 0 {
        let header = format_unnamed(&names, opts);
        return format!("{header}\n<0 rows> (or 0-length row.names)");
    }

    let mut cells = Vec::with_capacity(df.nrow() * df.ncol());
    for column in df.columns().iter() {
        match column {
            Obj::Vector(v) => cells.extend(format_elements(v, opts, false)),
            Obj::List(l) => cells.extend(l.iter().map(|x| format_cell(x, opts))),
            other => cells.extend(std::iter::repeat(format_cell(other, opts)).take(df.nrow())),
        }
    }

    format_grid(&cells, &df.row_names().labels(), &names, false, opts)
}

fn format_list(x: &List, prefix: &str, opts: &FormatOptions) -> String {
    if x.is_empty() {
        let named = if x.is_named() { "named " } else { "" };
        return format!("{named}list()");
    }

    let names = x.names();
    let mut out = String::new();
    for (i, value) in x.iter().enumerate() {
        let tag = match names.and_then(|n| n.get(i)) {
            Some(OptionNA::Some(name)) if !name.is_empty() => format!("{prefix}${name}"),
            _ => format!("{prefix}[[{}]]", i + 1),
        };

        let body = match value {
            Obj::List(l) => format_list(l, &tag, opts),
            other => other.format(opts),
        };

        out.push_str(&format!("{tag}\n{body}\n\n"));
    }

    out.trim_end_matches('\n').to_string() + "\n"
}

impl Obj {
    /// Render the value the way the console prints it
    pub fn format(&self, opts: &FormatOptions) -> String {
        match self {
            Obj::Null => "NULL".to_string(),
            Obj::Vector(v) => format_vector(v, opts),
            Obj::List(l) => format_list(l, "", opts).trim_end_matches('\n').to_string(),
            Obj::DataFrame(df) => format_data_frame(df, opts),
            Obj::Function(f) => format!("function (...) .Primitive(\"{}\")", f.sym()),
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r;

    #[test]
    fn doubles_use_significant_digits() {
        assert_eq!(format_double(3.3, 7), "3.3");
        assert_eq!(format_double(1.0 / 3.0, 7), "0.3333333");
        assert_eq!(format_double(123456789.0, 7), "123456789");
        assert_eq!(format_double(1e-5, 7), "1e-05");
        assert_eq!(format_double(1e15, 7), "1e+15");
        assert_eq!(format_double(0.001, 7), "0.001");
        assert_eq!(format_double(123456.0, 7), "123456");
    }

    #[test]
    fn doubles_share_decimals() {
        let x = Vector::from(vec![1.0, 2.5]);
        let formatted = format_elements(&x, &FormatOptions::default(), true);
        assert_eq!(formatted, vec!["1.0", "2.5"]);
    }

    #[test]
    fn unnamed_vectors_are_indexed() {
        assert_eq!(r!("c(3.3, 2.1)").to_string(), "[1] 3.3 2.1");
        assert_eq!(r!("integer(0)").to_string(), "integer(0)");
    }

    #[test]
    fn long_vectors_wrap() {
        let opts = FormatOptions {
            width: 12,
            digits: 7,
        };
        let x = r!("1:6");
        assert_eq!(x.format(&opts), "[1] 1 2 3 4\n[5] 5 6");
    }

    #[test]
    fn named_vectors_align_names() {
        assert_eq!(r!("c(a = 1, bb = 2)").to_string(), " a bb \n 1  2 ");
    }

    #[test]
    fn matrices_label_rows_and_columns() {
        assert_eq!(
            r!("matrix(1:4, nrow = 2)").to_string(),
            "     [,1] [,2]\n[1,]    1    3\n[2,]    2    4"
        );
    }

    #[test]
    fn lists_tag_elements() {
        assert_eq!(
            r!("list(a = 1, 2)").to_string(),
            "$a\n[1] 1\n\n[[2]]\n[1] 2"
        );
    }

    #[test]
    fn data_frames_print_unquoted() {
        assert_eq!(
            r!(r#"data.frame(x = 1:2, y = c("a", "b"))"#).to_string(),
            "  x y\n1 1 a\n2 2 b"
        );
    }
}
