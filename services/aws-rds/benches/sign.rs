use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::Method;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use rdsquery_aws_rds::{encode, Credential, ParameterSet, QueryExecutor, RequestSigner};
use rdsquery_core::Context;

criterion_group!(benches, bench_sign, bench_encode);
criterion_main!(benches);

const AWS_QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("aws_rds_sign");

    let cred = Credential::new("access_key_id", "secret_access_key");
    let params = ParameterSet::new()
        .with("Action", "DescribeDBInstances")
        .with("DBInstanceIdentifier", "mydb")
        .with("Version", "2014-10-31")
        .with("Timestamp", "2014-10-31T12:00:00Z");

    group.bench_function("sign", |b| {
        let signer = RequestSigner::new();

        b.iter(|| signer.sign(&params, &cred, &Method::GET, "/", "127.0.0.1:9000"))
    });

    group.bench_function("build_request", |b| {
        let executor = QueryExecutor::new(Context::new());

        b.iter(|| {
            executor
                .build_request(params.clone(), "http://127.0.0.1:9000", &cred)
                .expect("request must be built")
        })
    });

    group.finish();
}

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("aws_rds_encode");
    let input = "arn:aws:rds:us-east-1:123456789012:db:my-db/with spaces&symbols=~";

    group.bench_function("rdsquery", |b| b.iter(|| encode(input)));
    group.bench_function("percent_encoding", |b| {
        b.iter(|| utf8_percent_encode(input, AWS_QUERY_ENCODE_SET).to_string())
    });

    group.finish();
}
