//! Built-in tailwind class priority table.
//!
//! Utilities are grouped the way a layout is read: what the element is
//! (container, position, display), how it lays out its children, its box
//! (margin, padding, size), then typography, backgrounds, borders, effects,
//! motion and interactivity. Inside a group, scales run from small to large.

use std::sync::OnceLock;

use order_lint_core::sequence::PriorityTable;

const SPACING: &[&str] = &[
    "0", "px", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60",
    "64", "72", "80", "96",
];

const FRACTIONS: &[&str] = &[
    "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5", "1/6", "5/6", "1/12",
    "5/12", "7/12", "11/12",
];

const COLORS: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

const SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const OPACITY: &[&str] = &[
    "0", "5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55", "60", "65", "70", "75",
    "80", "85", "90", "95", "100",
];

const SIDES: &[&str] = &["", "x", "y", "s", "e", "t", "r", "b", "l"];

const CORNERS: &[&str] = &[
    "", "s", "e", "t", "r", "b", "l", "ss", "se", "ee", "es", "tl", "tr", "br", "bl",
];

const RADII: &[&str] = &["none", "sm", "", "md", "lg", "xl", "2xl", "3xl", "full"];

const BORDER_WIDTHS: &[&str] = &["", "0", "2", "4", "8"];

const DURATIONS: &[&str] = &["0", "75", "100", "150", "200", "300", "500", "700", "1000"];

/// Accumulates class names in priority order.
#[derive(Default)]
struct OrderBuilder {
    tokens: Vec<String>,
}

impl OrderBuilder {
    fn words(&mut self, words: &[&str]) -> &mut Self {
        self.tokens.extend(words.iter().map(|w| (*w).to_string()));
        self
    }

    /// `prefix-value` for each value; an empty value yields the bare prefix.
    fn scale(&mut self, prefix: &str, values: &[&str]) -> &mut Self {
        self.tokens.extend(values.iter().map(|v| {
            if v.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}-{v}")
            }
        }));
        self
    }

    /// Positive scale followed by its negated form.
    fn signed_scale(&mut self, prefix: &str, values: &[&str]) -> &mut Self {
        self.scale(prefix, values);
        let negated = format!("-{prefix}");
        self.scale(&negated, values.iter().filter(|v| **v != "0").copied().collect::<Vec<_>>().as_slice())
    }

    /// `prefix-side-value` for each side, the sideless form first.
    fn sided(&mut self, prefix: &str, sides: &[&str], values: &[&str]) -> &mut Self {
        for side in sides {
            let name = if side.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}{side}")
            };
            self.scale(&name, values);
        }
        self
    }

    fn colors(&mut self, prefix: &str) -> &mut Self {
        self.scale(prefix, SPECIAL_COLORS);
        for color in COLORS {
            self.scale(&format!("{prefix}-{color}"), SHADES);
        }
        self
    }

    fn finish(self) -> Vec<String> {
        self.tokens
    }
}

fn layout(b: &mut OrderBuilder) {
    b.words(&["container", "sr-only", "not-sr-only"])
        .words(&["static", "fixed", "absolute", "relative", "sticky"]);

    let inset_values: Vec<&str> = SPACING
        .iter()
        .chain(FRACTIONS)
        .chain(&["auto", "full"])
        .copied()
        .collect();
    for prefix in ["inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"] {
        b.signed_scale(prefix, &inset_values);
    }

    b.words(&["isolate", "isolation-auto"])
        .scale("z", &["0", "10", "20", "30", "40", "50", "auto"])
        .words(&[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ])
        .words(&["visible", "invisible", "collapse"])
        .scale("float", &["start", "end", "right", "left", "none"])
        .scale("clear", &["start", "end", "left", "right", "both", "none"])
        .words(&["box-border", "box-content"])
        .scale("aspect", &["auto", "square", "video"])
        .scale(
            "object",
            &[
                "contain",
                "cover",
                "fill",
                "none",
                "scale-down",
                "bottom",
                "center",
                "left",
                "left-bottom",
                "left-top",
                "right",
                "right-bottom",
                "right-top",
                "top",
            ],
        );

    for prefix in ["overflow", "overflow-x", "overflow-y"] {
        b.scale(prefix, &["auto", "hidden", "clip", "visible", "scroll"]);
    }
    for prefix in ["overscroll", "overscroll-x", "overscroll-y"] {
        b.scale(prefix, &["auto", "contain", "none"]);
    }
}

fn flexbox_and_grid(b: &mut OrderBuilder) {
    let twelve: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
    let twelve: Vec<&str> = twelve.iter().map(String::as_str).collect();
    let thirteen: Vec<String> = (1..=13).map(|n| n.to_string()).collect();
    let thirteen: Vec<&str> = thirteen.iter().map(String::as_str).collect();

    let basis: Vec<&str> = SPACING
        .iter()
        .chain(FRACTIONS)
        .chain(&["auto", "full"])
        .copied()
        .collect();

    b.scale("basis", &basis)
        .scale(
            "flex",
            &["row", "row-reverse", "col", "col-reverse", "wrap", "wrap-reverse", "nowrap"],
        )
        .scale("flex", &["1", "auto", "initial", "none"])
        .words(&["grow", "grow-0", "shrink", "shrink-0", "flex-grow", "flex-grow-0"])
        .words(&["flex-shrink", "flex-shrink-0"])
        .scale("order", &twelve)
        .scale("order", &["first", "last", "none"])
        .scale("grid-cols", &twelve)
        .scale("grid-cols", &["none", "subgrid"])
        .words(&["col-auto", "col-span-full"])
        .scale("col-span", &twelve)
        .scale("col-start", &thirteen)
        .scale("col-start", &["auto"])
        .scale("col-end", &thirteen)
        .scale("col-end", &["auto"])
        .scale("grid-rows", &twelve)
        .scale("grid-rows", &["none", "subgrid"])
        .words(&["row-auto", "row-span-full"])
        .scale("row-span", &twelve)
        .scale("row-start", &thirteen)
        .scale("row-start", &["auto"])
        .scale("row-end", &thirteen)
        .scale("row-end", &["auto"])
        .scale("grid-flow", &["row", "col", "dense", "row-dense", "col-dense"])
        .scale("auto-cols", &["auto", "min", "max", "fr"])
        .scale("auto-rows", &["auto", "min", "max", "fr"])
        .scale("gap", SPACING)
        .scale("gap-x", SPACING)
        .scale("gap-y", SPACING)
        .scale(
            "justify",
            &["normal", "start", "end", "center", "between", "around", "evenly", "stretch"],
        )
        .scale("justify-items", &["start", "end", "center", "stretch"])
        .scale("justify-self", &["auto", "start", "end", "center", "stretch"])
        .scale(
            "content",
            &["normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
        )
        .scale("items", &["start", "end", "center", "baseline", "stretch"])
        .scale("self", &["auto", "start", "end", "center", "stretch", "baseline"])
        .scale(
            "place-content",
            &["center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
        )
        .scale("place-items", &["start", "end", "center", "baseline", "stretch"])
        .scale("place-self", &["auto", "start", "end", "center", "stretch"]);
}

fn spacing(b: &mut OrderBuilder) {
    let margin: Vec<&str> = SPACING.iter().chain(&["auto"]).copied().collect();
    for prefix in ["space-x", "space-y"] {
        b.signed_scale(prefix, SPACING);
    }
    b.words(&["space-x-reverse", "space-y-reverse"]);

    for side in SIDES {
        let prefix = if side.is_empty() {
            "m".to_string()
        } else {
            format!("m{side}")
        };
        b.signed_scale(&prefix, &margin);
    }
    b.sided("p", SIDES, SPACING);
}

fn sizing(b: &mut OrderBuilder) {
    let width: Vec<&str> = SPACING
        .iter()
        .chain(FRACTIONS)
        .chain(&["auto", "full", "screen", "svw", "lvw", "dvw", "min", "max", "fit"])
        .copied()
        .collect();
    let height: Vec<&str> = SPACING
        .iter()
        .chain(FRACTIONS)
        .chain(&["auto", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"])
        .copied()
        .collect();
    let max_width: Vec<&str> = ["0", "none"]
        .iter()
        .chain(SIZES.iter().filter(|s| **s != "base"))
        .chain(&["full", "min", "max", "fit", "prose", "screen-sm", "screen-md", "screen-lg", "screen-xl", "screen-2xl"])
        .copied()
        .collect();

    b.scale("w", &width)
        .scale("min-w", &["0", "full", "min", "max", "fit"])
        .scale("max-w", &max_width)
        .scale("h", &height)
        .scale("min-h", &["0", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"])
        .scale("max-h", &height)
        .scale("size", &width);
}

fn typography(b: &mut OrderBuilder) {
    b.scale("font", &["sans", "serif", "mono"])
        .scale("text", SIZES)
        .words(&["antialiased", "subpixel-antialiased", "italic", "not-italic"])
        .scale(
            "font",
            &["thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black"],
        )
        .words(&[
            "normal-nums",
            "ordinal",
            "slashed-zero",
            "lining-nums",
            "oldstyle-nums",
            "proportional-nums",
            "tabular-nums",
            "diagonal-fractions",
            "stacked-fractions",
        ])
        .scale("tracking", &["tighter", "tight", "normal", "wide", "wider", "widest"])
        .scale("line-clamp", &["1", "2", "3", "4", "5", "6", "none"])
        .scale(
            "leading",
            &["3", "4", "5", "6", "7", "8", "9", "10", "none", "tight", "snug", "normal", "relaxed", "loose"],
        )
        .scale("list", &["inside", "outside", "none", "disc", "decimal"])
        .scale("text", &["left", "center", "right", "justify", "start", "end"])
        .colors("text")
        .scale("text-opacity", OPACITY)
        .words(&["underline", "overline", "line-through", "no-underline"])
        .colors("decoration")
        .scale("decoration", &["solid", "double", "dotted", "dashed", "wavy"])
        .scale("decoration", &["auto", "from-font", "0", "1", "2", "4", "8"])
        .scale("underline-offset", &["auto", "0", "1", "2", "4", "8"])
        .words(&["uppercase", "lowercase", "capitalize", "normal-case"])
        .words(&["truncate", "text-ellipsis", "text-clip"])
        .scale("text", &["wrap", "nowrap", "balance", "pretty"])
        .scale("indent", SPACING)
        .scale(
            "align",
            &["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"],
        )
        .scale(
            "whitespace",
            &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"],
        )
        .scale("break", &["normal", "words", "all", "keep"])
        .scale("hyphens", &["none", "manual", "auto"]);
}

fn backgrounds(b: &mut OrderBuilder) {
    b.scale("bg", &["fixed", "local", "scroll"])
        .scale("bg-clip", &["border", "padding", "content", "text"])
        .colors("bg")
        .scale("bg-opacity", OPACITY)
        .scale("bg-origin", &["border", "padding", "content"])
        .scale(
            "bg",
            &[
                "bottom",
                "center",
                "left",
                "left-bottom",
                "left-top",
                "right",
                "right-bottom",
                "right-top",
                "top",
            ],
        )
        .scale("bg", &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"])
        .scale("bg", &["auto", "cover", "contain"])
        .scale("bg", &["none"])
        .scale("bg-gradient-to", &["t", "tr", "r", "br", "b", "bl", "l", "tl"])
        .colors("from")
        .colors("via")
        .colors("to");
}

fn borders(b: &mut OrderBuilder) {
    b.sided("rounded", &CORNERS[..1], RADII);
    for corner in &CORNERS[1..] {
        b.scale(&format!("rounded-{corner}"), RADII);
    }
    for side in SIDES {
        let prefix = if side.is_empty() {
            "border".to_string()
        } else {
            format!("border-{side}")
        };
        b.scale(&prefix, BORDER_WIDTHS);
    }
    b.scale("border", &["solid", "dashed", "dotted", "double", "hidden", "none"])
        .colors("border")
        .scale("border-opacity", OPACITY)
        .sided("divide", &["-x", "-y"], BORDER_WIDTHS)
        .words(&["divide-x-reverse", "divide-y-reverse"])
        .scale("divide", &["solid", "dashed", "dotted", "double", "none"])
        .colors("divide")
        .scale("outline", &["", "none", "dashed", "dotted", "double"])
        .scale("outline", &["0", "1", "2", "4", "8"])
        .colors("outline")
        .scale("outline-offset", &["0", "1", "2", "4", "8"])
        .scale("ring", &["", "0", "1", "2", "4", "8", "inset"])
        .colors("ring")
        .scale("ring-offset", &["0", "1", "2", "4", "8"])
        .colors("ring-offset");
}

fn effects(b: &mut OrderBuilder) {
    b.scale("shadow", &["sm", "", "md", "lg", "xl", "2xl", "inner", "none"])
        .colors("shadow")
        .scale("opacity", OPACITY)
        .scale(
            "mix-blend",
            &["normal", "multiply", "screen", "overlay", "darken", "lighten", "difference"],
        )
        .scale("blur", &["none", "sm", "", "md", "lg", "xl", "2xl", "3xl"])
        .scale("brightness", &["0", "50", "75", "90", "95", "100", "105", "110", "125", "150", "200"])
        .scale("contrast", &["0", "50", "75", "100", "125", "150", "200"])
        .scale("drop-shadow", &["sm", "", "md", "lg", "xl", "2xl", "none"])
        .scale("grayscale", &["0", ""])
        .scale("invert", &["0", ""])
        .scale("sepia", &["0", ""])
        .scale("backdrop-blur", &["none", "sm", "", "md", "lg", "xl", "2xl", "3xl"])
        .words(&["filter", "filter-none"]);
}

fn tables(b: &mut OrderBuilder) {
    b.words(&["border-collapse", "border-separate"])
        .scale("table", &["auto", "fixed"])
        .scale("caption", &["top", "bottom"]);
}

fn motion(b: &mut OrderBuilder) {
    b.scale("transition", &["none", "all", "", "colors", "opacity", "shadow", "transform"])
        .scale("duration", DURATIONS)
        .scale("ease", &["linear", "in", "out", "in-out"])
        .scale("delay", DURATIONS)
        .scale("animate", &["none", "spin", "ping", "pulse", "bounce"]);
}

fn transforms(b: &mut OrderBuilder) {
    let scales = [
        "0", "50", "75", "90", "95", "100", "105", "110", "125", "150",
    ];
    let degrees = ["0", "1", "2", "3", "6", "12", "45", "90", "180"];
    let translate: Vec<&str> = SPACING
        .iter()
        .chain(FRACTIONS)
        .chain(&["full"])
        .copied()
        .collect();

    b.words(&["transform", "transform-cpu", "transform-gpu", "transform-none"])
        .scale(
            "origin",
            &[
                "center",
                "top",
                "top-right",
                "right",
                "bottom-right",
                "bottom",
                "bottom-left",
                "left",
                "top-left",
            ],
        )
        .scale("scale", &scales)
        .scale("scale-x", &scales)
        .scale("scale-y", &scales)
        .signed_scale("rotate", &degrees)
        .signed_scale("translate-x", &translate)
        .signed_scale("translate-y", &translate)
        .signed_scale("skew-x", &degrees[..7])
        .signed_scale("skew-y", &degrees[..7]);
}

fn interactivity(b: &mut OrderBuilder) {
    b.words(&["appearance-none", "appearance-auto"])
        .colors("accent")
        .colors("caret")
        .scale(
            "cursor",
            &[
                "auto",
                "default",
                "pointer",
                "wait",
                "text",
                "move",
                "help",
                "not-allowed",
                "none",
                "context-menu",
                "progress",
                "cell",
                "crosshair",
                "grab",
                "grabbing",
                "zoom-in",
                "zoom-out",
            ],
        )
        .scale("pointer-events", &["none", "auto"])
        .scale("resize", &["none", "y", "x", ""])
        .scale("scroll", &["auto", "smooth"])
        .scale("snap", &["start", "end", "center", "align-none", "none", "x", "y", "both", "mandatory", "proximity"])
        .scale("touch", &["auto", "none", "pan-x", "pan-y", "pinch-zoom", "manipulation"])
        .scale("select", &["none", "text", "all", "auto"])
        .scale("will-change", &["auto", "scroll", "contents", "transform"])
        .words(&["fill-none", "stroke-none"])
        .colors("fill")
        .colors("stroke")
        .scale("stroke", &["0", "1", "2"]);
}

/// The full class order.
#[must_use]
pub fn class_order() -> Vec<String> {
    let mut b = OrderBuilder::default();
    layout(&mut b);
    flexbox_and_grid(&mut b);
    spacing(&mut b);
    sizing(&mut b);
    typography(&mut b);
    backgrounds(&mut b);
    borders(&mut b);
    effects(&mut b);
    tables(&mut b);
    motion(&mut b);
    transforms(&mut b);
    interactivity(&mut b);
    b.finish()
}

/// The built-in priority table, built once.
pub fn default_table() -> &'static PriorityTable {
    static TABLE: OnceLock<PriorityTable> = OnceLock::new();
    TABLE.get_or_init(|| PriorityTable::new(class_order()))
}
