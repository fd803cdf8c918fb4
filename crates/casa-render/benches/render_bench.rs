//! Benchmarks for escaping and serialization.
//!
//! Run with: cargo bench -p casa-render --bench render_bench

use casa_render::{Node, el, escape_text, render};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    group.bench_function("clean", |b| {
        let text = "פיקאניה, אסאדו, דנבר קאט, פילה מיניון";
        b.iter(|| black_box(escape_text(black_box(text))))
    });
    group.bench_function("dirty", |b| {
        b.iter(|| black_box(escape_text(black_box("steak & <chips> & \"salad\""))))
    });
    group.finish();
}

fn menu_list(items: usize) -> Node {
    el("ul")
        .children((0..items).map(|i| {
            el("li")
                .class("menu-item")
                .child(el("h4").text(format!("Item {i}")))
                .child(el("span").class("price").text("₪139"))
        }))
        .into()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for n in [2, 21, 200] {
        let tree = menu_list(n);
        group.bench_function(format!("menu_list/{n}"), |b| b.iter(|| black_box(render(&tree))));
    }
    group.finish();
}

criterion_group!(benches, bench_escape, bench_render);
criterion_main!(benches);
