//! Rendering of sums of products as Verilog modules

use crate::*;

use std::fmt;

/// Names and layout of the generated module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig<'a> {
    module_name: &'a str,
    output: &'a str,
    indent: &'a str,
}

pub static DEFAULT_RENDER_CFG: RenderConfig = RenderConfig {
    module_name: "kmap_simplified",
    output: "F",
    indent: "    ",
};

impl<'a> RenderConfig<'a> {
    /// Create a configuration with custom module and output names.
    ///
    /// Both names must be valid Verilog identifiers.
    pub fn new(module_name: &'a str, output: &'a str) -> Result<Self, KmapError> {
        parse::check_identifier(module_name)?;
        parse::check_identifier(output)?;
        if VARIABLES.iter().any(|v| output == v.to_string()) {
            return Err(KmapError::InvalidName(output.to_string()));
        }
        Ok(Self {
            module_name,
            output,
            ..DEFAULT_RENDER_CFG
        })
    }

    pub fn module_name(&self) -> &str {
        self.module_name
    }

    pub fn output(&self) -> &str {
        self.output
    }

    /// Wrap an expression to display it as a module with this configuration
    pub fn module<'b>(&self, expr: &'b SopExpr) -> VerilogModule<'b>
    where
        'a: 'b,
    {
        VerilogModule { expr, cfg: *self }
    }
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        DEFAULT_RENDER_CFG
    }
}

/// An expression displayed as a complete Verilog module.
pub struct VerilogModule<'a> {
    expr: &'a SopExpr,
    cfg: RenderConfig<'a>,
}

impl VerilogModule<'_> {
    fn write_assignment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}assign {} = ", self.cfg.indent, self.cfg.output)?;
        match self.expr {
            SopExpr::Zero => write!(f, "1'b0")?,
            SopExpr::One => write!(f, "1'b1")?,
            SopExpr::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write_product(f, term)?;
                }
            }
        }
        writeln!(f, ";")
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, term: &Term) -> fmt::Result {
    if term.is_constant() {
        return write!(f, "(1'b1)");
    }
    write!(f, "(")?;
    for (i, l) in term.literals().iter().enumerate() {
        if i > 0 {
            write!(f, " & ")?;
        }
        if !l.positive {
            write!(f, "~")?;
        }
        write!(f, "{}", l.var)?;
    }
    write!(f, ")")
}

impl fmt::Display for VerilogModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.cfg.indent;
        writeln!(f, "module {} (", self.cfg.module_name)?;
        write!(f, "{}input wire ", indent)?;
        for (i, v) in VARIABLES.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        writeln!(f, ",")?;
        writeln!(f, "{}output wire {}", indent, self.cfg.output)?;
        writeln!(f, ");")?;
        writeln!(f)?;
        self.write_assignment(f)?;
        writeln!(f)?;
        writeln!(f, "endmodule")
    }
}

/// Render a sum of products as a Verilog module with a single continuous assignment.
///
/// ```
/// use kmap::{render_verilog, SopExpr, DEFAULT_RENDER_CFG};
/// # use kmap::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let sop: SopExpr = "A'B' + CD".parse()?;
/// let code = render_verilog(&sop, &DEFAULT_RENDER_CFG);
/// assert!(code.contains("assign F = (~A & ~B) | (C & D);"));
/// # Ok(())
/// # }
/// ```
pub fn render_verilog(expr: &SopExpr, cfg: &RenderConfig) -> String {
    cfg.module(expr).to_string()
}

/// Parse a sum of products and render it as a Verilog module
pub fn render_verilog_str(sop: &str, cfg: &RenderConfig) -> Result<String, KmapError> {
    let expr: SopExpr = sop.parse()?;
    Ok(render_verilog(&expr, cfg))
}

#[cfg(test)]
mod tests {
    use crate::verilog::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_sum() -> Result<(), KmapError> {
        let code = render_verilog_str("C'D + AD + BD", &DEFAULT_RENDER_CFG)?;
        let expected = "\
module kmap_simplified (
    input wire A, B, C, D,
    output wire F
);

    assign F = (A & D) | (B & D) | (~C & D);

endmodule
";
        assert_eq!(code, expected);
        Ok(())
    }

    #[test]
    fn render_constants() -> Result<(), KmapError> {
        let zero = render_verilog(&SopExpr::Zero, &DEFAULT_RENDER_CFG);
        assert!(zero.contains("    assign F = 1'b0;\n"));
        let one = render_verilog_str(" 1", &DEFAULT_RENDER_CFG)?;
        assert!(one.contains("    assign F = 1'b1;\n"));
        assert!(one.ends_with("endmodule\n"));
        Ok(())
    }

    #[test]
    fn render_single_literal() -> Result<(), KmapError> {
        let cfg = RenderConfig::new("decoder", "out")?;
        let code = render_verilog_str("B'", &cfg)?;
        assert!(code.starts_with("module decoder (\n"));
        assert!(code.contains("    output wire out\n"));
        assert!(code.contains("    assign out = (~B);\n"));
        Ok(())
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            render_verilog_str("A +", &DEFAULT_RENDER_CFG),
            Err(KmapError::InvalidExpression)
        );
        assert_eq!(
            RenderConfig::new("1module", "F"),
            Err(KmapError::InvalidName("1module".to_string()))
        );
        assert_eq!(
            RenderConfig::new("m", "A"),
            Err(KmapError::InvalidName("A".to_string()))
        );
        assert_eq!(RenderConfig::default(), DEFAULT_RENDER_CFG);
    }
}
