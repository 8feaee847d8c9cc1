use anyhow::Result;
use bit_codec::areas::toolkit::Toolkit;
use bit_codec::commands::plumbing::cat_file::CatFileMode;
use bit_codec::commands::plumbing::mktag::TagRequest;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit-codec",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Frame and parse git objects",
    long_about = "This tool builds and reads the canonical byte form of git blob, tree, \
    commit and tag objects. Frames are read from and written to plain files, \
    optionally zlib-compressed like loose objects.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "hash-object",
        about = "Frame a file's contents and print the object ID",
        long_about = "This command frames the content of a file as an object of the given kind \
        and prints its ID. Trees, commits and tags are checked before hashing."
    )]
    HashObject {
        #[arg(short = 't', long = "type", default_value = "blob", help = "The object kind")]
        kind: String,
        #[arg(short, long, help = "Write the frame to this file")]
        output: Option<PathBuf>,
        #[arg(short, long, requires = "output", help = "Compress the written frame")]
        zlib: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print information about a frame file",
        long_about = "This command reads a frame, raw or zlib-compressed, and prints its kind, \
        its size or its decoded contents.",
        group(ArgGroup::new("mode").required(true).args(["kind", "size", "pretty"]))
    )]
    CatFile {
        #[arg(short = 't', help = "Print the object kind")]
        kind: bool,
        #[arg(short = 's', help = "Print the body size")]
        size: bool,
        #[arg(short = 'p', help = "Print the decoded object")]
        pretty: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "mktree",
        about = "Build a tree object from ls-tree formatted lines",
        long_about = "This command reads lines of the form '<mode> <kind> <object-id>\\t<name>' \
        and prints the ID of the resulting tree."
    )]
    Mktree {
        #[arg(short, long, help = "Write the frame to this file")]
        output: Option<PathBuf>,
        #[arg(short, long, requires = "output", help = "Compress the written frame")]
        zlib: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit-tree",
        about = "Build a commit object",
        long_about = "This command builds a commit of a tree. The author and committer are read \
        from the GIT_AUTHOR_* and GIT_COMMITTER_* environment variables."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree object ID")]
        tree: String,
        #[arg(short, long = "parent", help = "A parent commit ID")]
        parents: Vec<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(short, long, help = "Write the frame to this file")]
        output: Option<PathBuf>,
        #[arg(short, long, requires = "output", help = "Compress the written frame")]
        zlib: bool,
    },
    #[command(
        name = "mktag",
        about = "Build an annotated tag object",
        long_about = "This command builds an annotated tag. The tagger is read from the \
        GIT_COMMITTER_* environment variables, or GIT_AUTHOR_* when those are not set."
    )]
    Mktag {
        #[arg(index = 1, help = "The tagged object ID")]
        object: String,
        #[arg(
            short = 't',
            long = "type",
            default_value = "commit",
            help = "The tagged object kind"
        )]
        kind: String,
        #[arg(short, long, help = "The tag name")]
        name: String,
        #[arg(short, long, help = "The tag message")]
        message: String,
        #[arg(short, long, help = "Write the frame to this file")]
        output: Option<PathBuf>,
        #[arg(short, long, requires = "output", help = "Compress the written frame")]
        zlib: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let toolkit = Toolkit::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::HashObject {
            kind,
            output,
            zlib,
            file,
        } => toolkit.hash_object(file, kind, output.as_deref(), *zlib)?,
        Commands::CatFile {
            kind,
            size,
            pretty: _,
            file,
        } => {
            let mode = if *kind {
                CatFileMode::Kind
            } else if *size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            toolkit.cat_file(file, mode)?
        }
        Commands::Mktree { output, zlib, file } => {
            toolkit.mktree(file, output.as_deref(), *zlib)?
        }
        Commands::CommitTree {
            tree,
            parents,
            message,
            output,
            zlib,
        } => toolkit.commit_tree(tree, parents, message, output.as_deref(), *zlib)?,
        Commands::Mktag {
            object,
            kind,
            name,
            message,
            output,
            zlib,
        } => {
            let request = TagRequest {
                object,
                kind,
                name,
                message,
            };

            toolkit.mktag(request, output.as_deref(), *zlib)?
        }
    }

    Ok(())
}
