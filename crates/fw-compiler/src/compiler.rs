//! Template compilation.
//!
//! Walks a template, hands each directive to [`Directive`] and collects the
//! output as an ordered list of [`Segment`]s: template text to print verbatim
//! and generated Rust code.

use crate::config::CompilerConfig;
use crate::directive::Directive;
use crate::error::CompileError;
use crate::node::{DirectiveNode, HtmlElement};
use crate::parser::{ParsedTag, next_tag};
use crate::unit::CompileUnit;

/// Piece of a compiled template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Template text, printed as-is.
    Text(String),
    /// Generated Rust statements.
    Code(String),
}

/// Result of compiling one template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Segments in template order. Adjacent text is merged.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Generated code segments only.
    pub fn code(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Code(code) => Some(code.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Render the template as a Rust function.
    ///
    /// The function has the signature
    /// `fn NAME(out: &mut String, ctx: RenderContext<'_>) -> Result<(), RenderError>`
    /// with both types taken from `runtime_path`.
    #[must_use]
    pub fn to_rust_source(&self, function_name: &str, runtime_path: &str) -> String {
        let mut src = String::new();
        src.push_str("#[allow(unused_variables, clippy::all)]\n");
        src.push_str(&format!(
            "pub fn {function_name}(out: &mut String, ctx: {runtime_path}::RenderContext<'_>) \
             -> Result<(), {runtime_path}::RenderError> {{\n"
        ));
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => {
                    src.push_str(&format!("    out.push_str({text:?});\n"));
                }
                Segment::Code(code) => {
                    src.push_str("    ");
                    src.push_str(code);
                    src.push('\n');
                }
            }
        }
        src.push_str("    Ok(())\n}\n");
        src
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_owned()));
        }
    }

    /// Append code and return its index for later rewriting.
    fn push_code(&mut self, code: String) -> usize {
        self.segments.push(Segment::Code(code));
        self.segments.len() - 1
    }

    fn set_code(&mut self, index: usize, code: String) {
        self.segments[index] = Segment::Code(code);
    }
}

/// Paired directive waiting for its closing tag.
struct OpenDirective {
    directive: Directive,
    node: DirectiveNode,
    /// Index of the opening code segment.
    segment: usize,
    /// Byte offset where the body starts.
    body_start: usize,
}

/// Form directive compiler.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler.
    #[must_use]
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Compiler settings.
    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile a template.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] on a missing directive name, an unbalanced or
    /// mismatched closing tag, or an unclosed paired directive.
    pub fn compile(&self, template: &str) -> Result<CompiledTemplate, CompileError> {
        let mut unit = CompileUnit::new(&self.config);
        let mut program = CompiledTemplate::default();
        let mut open: Vec<OpenDirective> = Vec::new();
        let mut pos = 0;
        let mut line = 1;

        while let Some((tag, start, end)) = next_tag(&template[pos..], &self.config.attribute_prefix)
        {
            let (start, end) = (pos + start, pos + end);
            let text = &template[pos..start];
            line += text.matches('\n').count();
            program.push_text(text);

            match tag {
                ParsedTag::Open {
                    directive,
                    args,
                    self_closing,
                } => {
                    let mut node = DirectiveNode::new(directive.name(), args, line);
                    directive.open(&mut node, &mut unit)?;
                    if !directive.is_paired() {
                        program.push_code(node.opening_code);
                    } else if self_closing {
                        directive.close(&mut node, &mut unit)?;
                        program.push_code(node.opening_code);
                        if !node.closing_code.is_empty() {
                            program.push_code(node.closing_code);
                        }
                    } else {
                        let segment = program.push_code(node.opening_code.clone());
                        open.push(OpenDirective {
                            directive,
                            node,
                            segment,
                            body_start: end,
                        });
                    }
                }
                ParsedTag::Close { directive } => {
                    let Some(mut frame) = open.pop() else {
                        return Err(CompileError::UnexpectedClose {
                            name: directive.name().to_owned(),
                            line,
                        });
                    };
                    if frame.directive != directive {
                        return Err(CompileError::MismatchedClose {
                            expected: frame.directive.name().to_owned(),
                            found: directive.name().to_owned(),
                            line,
                        });
                    }
                    let body = &template[frame.body_start..start];
                    frame.node.content = (!body.is_empty()).then(|| body.to_owned());
                    directive.close(&mut frame.node, &mut unit)?;
                    program.set_code(frame.segment, frame.node.opening_code);
                    if !frame.node.closing_code.is_empty() {
                        program.push_code(frame.node.closing_code);
                    }
                }
                ParsedTag::Element {
                    name,
                    directive,
                    args,
                    attrs,
                    tail,
                } => {
                    let element = HtmlElement {
                        name: name.clone(),
                        attrs: attrs
                            .iter()
                            .map(|a| (a.name.clone(), a.value.clone()))
                            .collect(),
                    };
                    let mut node = DirectiveNode::attribute(directive.name(), args, element, line);
                    directive.attribute(&mut node, &mut unit)?;
                    program.push_text(&format!("<{name}"));
                    program.push_code(node.opening_code);
                    for attr in &attrs {
                        program.push_text(&attr.raw);
                    }
                    program.push_text(&tail);
                }
            }

            line += template[start..end].matches('\n').count();
            pos = end;
        }
        program.push_text(&template[pos..]);

        if let Some(frame) = open.pop() {
            return Err(CompileError::UnclosedDirective {
                name: frame.directive.name().to_owned(),
                line: frame.node.line,
            });
        }
        unit.finish()?;

        tracing::debug!(segments = program.segments.len(), "Compiled template");
        Ok(program)
    }
}
