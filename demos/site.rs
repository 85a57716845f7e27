//! Site demo - resolve a few request paths against a tiny document tree.
//!
//! This example demonstrates:
//! - Registering consumers for folder traversal
//! - Registering named and default views per model type
//! - Publishing raw, percent-encoded request paths
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=trace cargo run --example site
//! ```

use std::collections::BTreeMap;

use pathwalk::lookup::{ConsumerRegistry, RequestContext, ViewRegistry};
use pathwalk::path::{Namespace, Segment};
use pathwalk::{ConfigError, Node, Publisher};

/// A folder with named children.
#[derive(Debug)]
struct Folder {
    title: String,
    children: BTreeMap<String, Node>,
}

/// A text document.
#[derive(Debug)]
struct Document {
    body: String,
}

/// What a resolved view renders to.
type Render = Box<dyn Fn() -> String + Send + Sync>;

fn site() -> Node {
    let docs = Folder {
        title: "Documentation".to_string(),
        children: BTreeMap::from([(
            "café".to_string(),
            Node::new(Document {
                body: "Espresso, please.".to_string(),
            }),
        )]),
    };
    Node::new(Folder {
        title: "Home".to_string(),
        children: BTreeMap::from([("docs".to_string(), Node::new(docs))]),
    })
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt::init();

    let mut consumers = ConsumerRegistry::new();
    consumers.register(|folder: &Folder, segment: &Segment| {
        if segment.namespace != Namespace::Default {
            return None;
        }
        folder.children.get(&segment.name).cloned()
    });

    let mut views: ViewRegistry<Render> = ViewRegistry::new();
    views.register("index", |folder: &Folder, _: &RequestContext| -> Render {
        let listing = format!(
            "{}: {}",
            folder.title,
            folder.children.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        Box::new(move || listing.clone())
    });
    views.register("index", |doc: &Document, _: &RequestContext| -> Render {
        let body = doc.body.clone();
        Box::new(move || body.clone())
    });
    views.register("raw", |doc: &Document, ctx: &RequestContext| -> Render {
        let client = ctx.var("REMOTE_ADDR").unwrap_or("?");
        let line = format!("{} bytes for {}", doc.body.len(), client);
        Box::new(move || line.clone())
    });

    let publisher = Publisher::builder(consumers, views)
        .shortcut("@@", Namespace::View)
        .build()?;
    let root = site();

    for path in [
        "/",
        "/docs",
        "/docs/caf%C3%A9",
        "/docs/caf%C3%A9/@@raw",
        "/docs/caf%C3%A9/++view++pdf",
        "/docs/missing",
        "/docs/missing/deeper",
    ] {
        let ctx = RequestContext::new(path).with_var("REMOTE_ADDR", "127.0.0.1");
        match publisher.publish_request(&root, &ctx) {
            Ok(render) => println!("{:<30} -> {}", path, render()),
            Err(e) => println!("{:<30} !! {}", path, e),
        }
    }
    Ok(())
}
