use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trivert::{convert, Format};

const JSON_INPUT: &str = r#"{"name": "test", "value": 42, "nested": {"a": "1", "b": [1, 2, 3]}}"#;
const YAML_INPUT: &str = "name: test\nvalue: 42\nnested:\n  a: '1'\n  b: [1, 2, 3]\n";
const XML_INPUT: &str =
    "<root><name>test</name><value>42</value><nested><a>1</a><b>1</b><b>2</b><b>3</b></nested></root>";

fn bench_json_to_xml(c: &mut Criterion) {
    c.bench_function("convert_json_xml", |b| {
        b.iter(|| convert(black_box(JSON_INPUT), Format::Json, Format::Xml))
    });
}

fn bench_yaml_to_json(c: &mut Criterion) {
    c.bench_function("convert_yaml_json", |b| {
        b.iter(|| convert(black_box(YAML_INPUT), Format::Yaml, Format::Json))
    });
}

fn bench_xml_to_json(c: &mut Criterion) {
    c.bench_function("convert_xml_json", |b| {
        b.iter(|| convert(black_box(XML_INPUT), Format::Xml, Format::Json))
    });
}

fn bench_xml_to_yaml(c: &mut Criterion) {
    c.bench_function("convert_xml_yaml", |b| {
        b.iter(|| convert(black_box(XML_INPUT), Format::Xml, Format::Yaml))
    });
}

criterion_group!(
    benches,
    bench_json_to_xml,
    bench_yaml_to_json,
    bench_xml_to_json,
    bench_xml_to_yaml
);
criterion_main!(benches);
