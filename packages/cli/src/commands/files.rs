use crate::config::Config;
use crate::output::to_json;
use anyhow::Result;
use arbor_core::{build, ComponentRef, ElementResult, Props, Value};
use clap::Args;
use tracing::{info, instrument};

#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Spaces per indentation level (overrides config)
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Print a directory tree assembled from plain function components
#[instrument(skip_all)]
pub fn files(args: FilesArgs, config: &Config) -> Result<()> {
    let tree = file_tree()?;
    info!("Built demo file tree");
    println!("{}", to_json(&tree, args.indent.unwrap_or(config.indent))?);
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum FileType {
    File,
    Directory,
    SymbolicLink,
}

impl FileType {
    fn as_str(self) -> &'static str {
        match self {
            FileType::File => "file",
            FileType::Directory => "directory",
            FileType::SymbolicLink => "symlink",
        }
    }

    /// Props each entry type must carry besides its name
    fn required_props(self) -> &'static [&'static str] {
        match self {
            FileType::File => &["data"],
            FileType::Directory => &[],
            FileType::SymbolicLink => &["target"],
        }
    }
}

/// Function component that stamps its props with an entry type
fn entry(file_type: FileType) -> ComponentRef {
    let name = match file_type {
        FileType::File => "File",
        FileType::Directory => "Directory",
        FileType::SymbolicLink => "SymbolicLink",
    };

    ComponentRef::function(name, move |props| {
        props.require_str("name")?;
        for key in file_type.required_props() {
            props.require(key)?;
        }
        Ok(Value::from(props.clone().with("type", file_type.as_str())))
    })
}

fn file_tree() -> ElementResult<Value> {
    let directory = entry(FileType::Directory);
    let file = entry(FileType::File);
    let symlink = entry(FileType::SymbolicLink);

    let named = |name: &str| Props::new().with("name", name);

    build(
        &directory,
        named("root"),
        vec![
            build(
                &directory,
                named("sub"),
                vec![build(&file, named("file1").with("data", "..."), vec![])?],
            )?,
            build(
                &directory,
                named("sub2"),
                vec![
                    build(&file, named("file2").with("data", "..."), vec![])?,
                    build(
                        &symlink,
                        named("file3").with("target", "../sub/file1"),
                        vec![],
                    )?,
                ],
            )?,
        ],
    )
}
