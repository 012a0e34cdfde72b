//! Benchmark: serialization and trusted markup parsing

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weft_core::{
	AttrSchema, AttrSpec, AttrType, Child, Node, NodeType, Registry, Result, Safe, parse,
};

const ATTRS: &[AttrSpec] = &[
	AttrSpec::optional("class", AttrType::Str),
	AttrSpec::optional("hidden", AttrType::Bool),
];

static LIST: NodeType = NodeType::element("ul")
	.with_attrs(AttrSchema::new(&[ATTRS]))
	.always_pair();
static ITEM: NodeType = NodeType::element("li")
	.with_attrs(AttrSchema::new(&[ATTRS]))
	.always_pair();
static BOLD: NodeType = NodeType::element("b").always_pair();
static ROW: NodeType = NodeType::component("Row", render_row);

fn render_row(node: &Node) -> Result<Node> {
	ITEM.node()
		.attr("class", "row")
		.children(node.children().iter().cloned())
		.build_in(&Registry::new())
}

fn build_list(rows: usize) -> Node {
	let registry = Registry::new();
	let items: Vec<Child> = (0..rows)
		.map(|i| {
			ROW.node()
				.child(format!("item <{}> & more", i))
				.build_in(&registry)
				.map(Child::from)
		})
		.collect::<Result<_>>()
		.unwrap();
	LIST.node().children(items).build_in(&registry).unwrap()
}

fn benchmark_to_html(c: &mut Criterion) {
	let list = build_list(100);
	c.bench_function("to_html_100_rows", |b| {
		b.iter(|| black_box(&list).to_html().unwrap())
	});
}

fn benchmark_pretty(c: &mut Criterion) {
	let list = build_list(100);
	c.bench_function("pretty_100_rows", |b| b.iter(|| black_box(&list).to_string()));
}

fn benchmark_parse(c: &mut Criterion) {
	let registry = Registry::new();
	registry.register(&BOLD).unwrap();
	let markup = Safe::new("Hello, how <b>are you</b>? ".repeat(50));
	c.bench_function("parse_50_tags", |b| {
		b.iter(|| parse(black_box(markup.as_str()), &registry).unwrap())
	});
}

criterion_group!(benches, benchmark_to_html, benchmark_pretty, benchmark_parse);
criterion_main!(benches);
