//! ASCIIMath symbol table
//!
//! Maps every notation token to the tree fragment it produces together with
//! the parser flags that drive operand consumption, grouping and infix
//! rewriting. The table is immutable and lives in a perfect hash map, so it is
//! shared freely between documents and threads.
//!
//! Lookups are longest-match: [`longest_match`] probes prefixes of the input
//! from [`MAX_SYMBOL_LEN`] bytes down to one, so a token such as `sube` can
//! never be shadowed by `sub`, whatever order the entries are declared in.
//!
//! # Examples
//!
//! ```rust
//! use asciimathml::symbols::longest_match;
//!
//! let (token, def) = longest_match("subex").unwrap();
//! assert_eq!(token, "sube");
//! assert_eq!(def.instantiate().text.as_deref(), Some("\u{2286}"));
//! ```

mod types;
use phf::phf_map;
pub use types::{SymbolDef, Template};

use crate::mathml_tree::{MathNodeType, SpecialBinary};

/// Byte length of the longest token in [`SYMBOLS`].
pub const MAX_SYMBOL_LEN: usize = 10;

/// The full notation table, keyed by input token.
pub static SYMBOLS: phf::Map<&'static str, SymbolDef> = phf_map! {
    // Greek letters
    "alpha" => SymbolDef::mi("\u{3b1}"),
    "beta" => SymbolDef::mi("\u{3b2}"),
    "chi" => SymbolDef::mi("\u{3c7}"),
    "delta" => SymbolDef::mi("\u{3b4}"),
    "Delta" => SymbolDef::mo("\u{394}"),
    "epsi" => SymbolDef::mi("\u{3b5}"),
    "varepsilon" => SymbolDef::mi("\u{25b}"),
    "eta" => SymbolDef::mi("\u{3b7}"),
    "gamma" => SymbolDef::mi("\u{3b3}"),
    "Gamma" => SymbolDef::mo("\u{393}"),
    "iota" => SymbolDef::mi("\u{3b9}"),
    "kappa" => SymbolDef::mi("\u{3ba}"),
    "lambda" => SymbolDef::mi("\u{3bb}"),
    "Lambda" => SymbolDef::mo("\u{39b}"),
    "mu" => SymbolDef::mi("\u{3bc}"),
    "nu" => SymbolDef::mi("\u{3bd}"),
    "omega" => SymbolDef::mi("\u{3c9}"),
    "Omega" => SymbolDef::mo("\u{3a9}"),
    "phi" => SymbolDef::mi("\u{3c6}"),
    "varphi" => SymbolDef::mi("\u{3d5}"),
    "Phi" => SymbolDef::mo("\u{3a6}"),
    "pi" => SymbolDef::mi("\u{3c0}"),
    "Pi" => SymbolDef::mo("\u{3a0}"),
    "psi" => SymbolDef::mi("\u{3c8}"),
    "Psi" => SymbolDef::mi("\u{3a8}"),
    "rho" => SymbolDef::mi("\u{3c1}"),
    "sigma" => SymbolDef::mi("\u{3c3}"),
    "Sigma" => SymbolDef::mo("\u{3a3}"),
    "tau" => SymbolDef::mi("\u{3c4}"),
    "theta" => SymbolDef::mi("\u{3b8}"),
    "vartheta" => SymbolDef::mi("\u{3d1}"),
    "Theta" => SymbolDef::mo("\u{398}"),
    "upsilon" => SymbolDef::mi("\u{3c5}"),
    "xi" => SymbolDef::mi("\u{3be}"),
    "Xi" => SymbolDef::mo("\u{39e}"),
    "zeta" => SymbolDef::mi("\u{3b6}"),

    // Binary operators
    "*" => SymbolDef::mo("\u{22c5}"),
    "**" => SymbolDef::mo("\u{22c6}"),
    "/" => SymbolDef::mo("/").special(SpecialBinary::Fraction),
    "^" => SymbolDef::mo("^").special(SpecialBinary::Superscript),
    "_" => SymbolDef::mo("_").special(SpecialBinary::Subscript),
    "//" => SymbolDef::mo("/"),
    "\\\\" => SymbolDef::mo("\\"),
    "setminus" => SymbolDef::mo("\\"),
    "xx" => SymbolDef::mo("\u{d7}"),
    "-:" => SymbolDef::mo("\u{f7}"),
    "@" => SymbolDef::mo("\u{2218}"),
    "o+" => SymbolDef::mo("\u{2295}"),
    "ox" => SymbolDef::mo("\u{2297}"),
    "o." => SymbolDef::mo("\u{2299}"),
    "sum" => SymbolDef::mo("\u{2211}").underover(),
    "prod" => SymbolDef::mo("\u{220f}").underover(),
    "^^" => SymbolDef::mo("\u{2227}"),
    "^^^" => SymbolDef::mo("\u{22c0}").underover(),
    "vv" => SymbolDef::mo("\u{2228}"),
    "vvv" => SymbolDef::mo("\u{22c1}").underover(),
    "nn" => SymbolDef::mo("\u{2229}"),
    "nnn" => SymbolDef::mo("\u{22c2}").underover(),
    "uu" => SymbolDef::mo("\u{222a}"),
    "uuu" => SymbolDef::mo("\u{22c3}").underover(),

    // Relations
    "!=" => SymbolDef::mo("\u{2260}"),
    ":=" => SymbolDef::mo(":="),
    "lt" => SymbolDef::mo("<"),
    "<=" => SymbolDef::mo("\u{2264}"),
    "lt=" => SymbolDef::mo("\u{2264}"),
    ">=" => SymbolDef::mo("\u{2265}"),
    "geq" => SymbolDef::mo("\u{2265}"),
    "-<" => SymbolDef::mo("\u{227a}"),
    "-lt" => SymbolDef::mo("\u{227a}"),
    ">-" => SymbolDef::mo("\u{227b}"),
    "-<=" => SymbolDef::mo("\u{2aaf}"),
    ">-=" => SymbolDef::mo("\u{2ab0}"),
    "in" => SymbolDef::mo("\u{2208}"),
    "!in" => SymbolDef::mo("\u{2209}"),
    "sub" => SymbolDef::mo("\u{2282}"),
    "sup" => SymbolDef::mo("\u{2283}"),
    "sube" => SymbolDef::mo("\u{2286}"),
    "supe" => SymbolDef::mo("\u{2287}"),
    "-=" => SymbolDef::mo("\u{2261}"),
    "~=" => SymbolDef::mo("\u{2245}"),
    "~~" => SymbolDef::mo("\u{2248}"),
    "prop" => SymbolDef::mo("\u{221d}"),

    // Logical symbols
    "and" => SymbolDef::mtext("and").spaced(),
    "or" => SymbolDef::mtext("or").spaced(),
    "not" => SymbolDef::mo("\u{ac}"),
    "=>" => SymbolDef::mo("\u{21d2}"),
    "if" => SymbolDef::mo("if").spaced(),
    "<=>" => SymbolDef::mo("\u{21d4}"),
    "AA" => SymbolDef::mo("\u{2200}"),
    "EE" => SymbolDef::mo("\u{2203}"),
    "_|_" => SymbolDef::mo("\u{22a5}"),
    "TT" => SymbolDef::mo("\u{22a4}"),
    "|--" => SymbolDef::mo("\u{22a2}"),
    "|==" => SymbolDef::mo("\u{22a8}"),

    // Grouping brackets
    "(" => SymbolDef::mo("(").opening(),
    ")" => SymbolDef::mo(")").closing(),
    "[" => SymbolDef::mo("[").opening(),
    "]" => SymbolDef::mo("]").closing(),
    "{" => SymbolDef::mo("{").opening(),
    "}" => SymbolDef::mo("}").closing(),
    "|" => SymbolDef::mo("|").opening().closing(),
    "||" => SymbolDef::mo("\u{2016}").opening().closing(),
    "(:" => SymbolDef::mo("\u{2329}").opening(),
    ":)" => SymbolDef::mo("\u{232a}").closing(),
    "<<" => SymbolDef::mo("\u{2329}").opening(),
    ">>" => SymbolDef::mo("\u{232a}").closing(),
    "{:" => SymbolDef::mo("{:").opening().invisible(),
    ":}" => SymbolDef::mo(":}").closing().invisible(),

    // Miscellaneous symbols
    "int" => SymbolDef::mo("\u{222b}"),
    "oint" => SymbolDef::mo("\u{222e}"),
    "del" => SymbolDef::mo("\u{2202}"),
    "grad" => SymbolDef::mo("\u{2207}"),
    "+-" => SymbolDef::mo("\u{b1}"),
    "O/" => SymbolDef::mo("\u{2205}"),
    "oo" => SymbolDef::mo("\u{221e}"),
    "aleph" => SymbolDef::mo("\u{2135}"),
    "..." => SymbolDef::mo("..."),
    ":." => SymbolDef::mo("\u{2234}"),
    "/_" => SymbolDef::mo("\u{2220}"),
    "\\ " => SymbolDef::mo("\u{a0}"),
    "quad" => SymbolDef::mo("\u{a0}\u{a0}"),
    "qquad" => SymbolDef::mo("\u{a0}\u{a0}\u{a0}\u{a0}"),
    "cdots" => SymbolDef::mo("\u{22ef}"),
    "vdots" => SymbolDef::mo("\u{22ee}"),
    "ddots" => SymbolDef::mo("\u{22f1}"),
    "diamond" => SymbolDef::mo("\u{22c4}"),
    "square" => SymbolDef::mo("\u{25a1}"),
    "|__" => SymbolDef::mo("\u{230a}"),
    "__|" => SymbolDef::mo("\u{230b}"),
    "|~" => SymbolDef::mo("\u{2308}"),
    "~|" => SymbolDef::mo("\u{2309}"),
    "CC" => SymbolDef::mo("\u{2102}"),
    "NN" => SymbolDef::mo("\u{2115}"),
    "QQ" => SymbolDef::mo("\u{211a}"),
    "RR" => SymbolDef::mo("\u{211d}"),
    "ZZ" => SymbolDef::mo("\u{2124}"),

    // Standard functions
    "lim" => SymbolDef::mo("lim").underover(),
    "Lim" => SymbolDef::mo("Lim").underover(),
    "sin" => SymbolDef::function("sin"),
    "cos" => SymbolDef::function("cos"),
    "tan" => SymbolDef::function("tan"),
    "sinh" => SymbolDef::function("sinh"),
    "cosh" => SymbolDef::function("cosh"),
    "tanh" => SymbolDef::function("tanh"),
    "cot" => SymbolDef::function("cot"),
    "sec" => SymbolDef::function("sec"),
    "csc" => SymbolDef::function("csc"),
    "log" => SymbolDef::function("log"),
    "ln" => SymbolDef::function("ln"),
    "det" => SymbolDef::function("det"),
    "gcd" => SymbolDef::function("gcd"),
    "lcm" => SymbolDef::function("lcm"),
    "dim" => SymbolDef::mo("dim"),
    "mod" => SymbolDef::mo("mod"),
    "lub" => SymbolDef::mo("lub"),
    "glb" => SymbolDef::mo("glb"),
    "min" => SymbolDef::mo("min").underover(),
    "max" => SymbolDef::mo("max").underover(),

    // Arrows
    "uarr" => SymbolDef::mo("\u{2191}"),
    "darr" => SymbolDef::mo("\u{2193}"),
    "rarr" => SymbolDef::mo("\u{2192}"),
    "->" => SymbolDef::mo("\u{2192}"),
    "|->" => SymbolDef::mo("\u{21a6}"),
    "larr" => SymbolDef::mo("\u{2190}"),
    "harr" => SymbolDef::mo("\u{2194}"),
    "rArr" => SymbolDef::mo("\u{21d2}"),
    "lArr" => SymbolDef::mo("\u{21d0}"),
    "hArr" => SymbolDef::mo("\u{21d4}"),

    // Accents
    "hat" => SymbolDef::over_accent("^"),
    "bar" => SymbolDef::over_accent("\u{af}"),
    "vec" => SymbolDef::over_accent("\u{2192}"),
    "dot" => SymbolDef::over_accent("."),
    "ddot" => SymbolDef::over_accent(".."),
    "ul" => SymbolDef::under_accent("\u{332}"),

    // Layout commands
    "sqrt" => SymbolDef::layout(MathNodeType::Msqrt).unary(),
    "root" => SymbolDef::layout(MathNodeType::Mroot).binary().operand_first(),
    "frac" => SymbolDef::layout(MathNodeType::Mfrac).binary(),
    "stackrel" => SymbolDef::layout(MathNodeType::Mover).binary(),
    "text" => SymbolDef::free_text(),
};

/// Find the longest token in [`SYMBOLS`] that prefixes `input`.
///
/// Returns the matched token text (a prefix of `input`) with its entry.
#[must_use]
pub fn longest_match(input: &str) -> Option<(&str, &'static SymbolDef)> {
    let limit = input.len().min(MAX_SYMBOL_LEN);
    (1..=limit)
        .rev()
        .filter(|&end| input.is_char_boundary(end))
        .find_map(|end| {
            let token = &input[..end];
            SYMBOLS.get(token).map(|def| (token, def))
        })
}
