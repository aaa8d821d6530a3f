use crate::config::{Config, OutputFormat};
use crate::output::{to_json, to_outline};
use anyhow::Result;
use arbor_common::{visit_fn, Node};
use arbor_core::{
    build, create, is_class_component, is_component_instance, ClassComponent, Component,
    ComponentRef, Element, ElementResult, Instance, Props, Value,
};
use clap::Args;
use colored::Colorize;
use std::convert::Infallible;
use tracing::instrument;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Output format for the tree itself (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug)]
struct Panel {
    title: String,
}

impl Component for Panel {}

impl ClassComponent for Panel {
    fn construct(props: &Props) -> ElementResult<Self> {
        Ok(Self {
            title: props.require_str("title")?.to_string(),
        })
    }
}

/// The three component kinds used by the demo
struct DemoComponents {
    panel: ComponentRef,
    counter: ComponentRef,
    maybe_panel: ComponentRef,
}

impl DemoComponents {
    fn new() -> Self {
        Self {
            panel: ComponentRef::class::<Panel>(),
            counter: ComponentRef::function("Counter", |props| {
                props.require_number("n")?;
                Ok(Value::Null)
            }),
            maybe_panel: ComponentRef::factory("MaybePanel", |props| {
                if props.get_bool("show") {
                    Ok(Some(Instance::new(Panel {
                        title: "abc".to_string(),
                    })))
                } else {
                    Ok(None)
                }
            }),
        }
    }

    fn app(&self) -> Element {
        let panel = |title: &str, children: Vec<Value>| {
            create(&self.panel, Props::new().with("title", title), children)
        };
        let counter = || create(&self.counter, Props::new().with("n", 1), vec![]);

        panel(
            "abc",
            vec![
                panel("xyz", vec![]).into(),
                panel(
                    "xyz",
                    vec![
                        counter().into(),
                        create(&self.maybe_panel, Props::new().with("show", true), vec![]).into(),
                    ],
                )
                .into(),
                create(&self.maybe_panel, Props::new(), vec![]).into(),
                counter().into(),
            ],
        )
    }
}

/// Classify the demo components, then walk a tree built from them
#[instrument(skip_all)]
pub async fn tree(args: TreeArgs, config: &Config) -> Result<()> {
    let components = DemoComponents::new();

    println!("{}", "Classification".bright_blue().bold());
    for component in [&components.counter, &components.panel, &components.maybe_panel] {
        println!(
            "  is_class_component({}) = {}",
            component.name(),
            is_class_component(component)
        );
    }

    let produced = [
        ("Counter(n=1)", build(&components.counter, Props::new().with("n", 1), vec![])?),
        (
            "Panel(title=\"abc\")",
            build(&components.panel, Props::new().with("title", "abc"), vec![])?,
        ),
        (
            "MaybePanel(show)",
            build(&components.maybe_panel, Props::new().with("show", true), vec![])?,
        ),
    ];
    for (label, value) in &produced {
        let detail = value
            .as_instance()
            .and_then(|instance| instance.downcast_ref::<Panel>())
            .map(|panel| format!(" (title {:?})", panel.title))
            .unwrap_or_default();
        println!(
            "  is_component_instance({}) = {}{}",
            label,
            is_component_instance(value),
            detail
        );
    }

    let app = components.app();

    println!();
    println!("{}", "Traversal".bright_blue().bold());
    for line in traversal_lines(&app).await? {
        println!("  {}", line);
    }

    println!();
    println!("{}", "Tree".bright_blue().bold());
    match args.format.unwrap_or(config.format) {
        OutputFormat::Outline => print!("{}", to_outline(&app, config.indent)),
        OutputFormat::Json => println!("{}", to_json(&app, config.indent)?),
    }

    Ok(())
}

/// One `node <- parent` line per visited node
async fn traversal_lines(root: &Element) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    visit_fn(root, |node, parent| {
        let parent = parent
            .map(describe_element)
            .unwrap_or_else(|| "(root)".to_string());
        let node = match node {
            Node::Element(element) => describe_element(element),
            Node::Leaf(value) => format!("{:?}", value),
        };
        lines.push(format!("{} {} {}", node, "<-".dimmed(), parent));
        std::future::ready(Ok::<(), Infallible>(()))
    })
    .await?;

    Ok(lines)
}

fn describe_element(element: &Element) -> String {
    let component = element.component();
    match element.props().get_str("title") {
        Some(title) => format!("{}({:?})", component.name(), title),
        None => component.name().to_string(),
    }
}
