use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::Method;
use once_cell::sync::Lazy;
use volcsign_core::time::parse_rfc3339;
use volcsign_core::{Context, Signer};
use volcsign_openapi::{ApiRequest, Credential, RequestSigner, StaticCredentialProvider};

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("openapi");

    let time = parse_rfc3339("2024-01-02T03:04:05Z").expect("time must be valid");

    group.bench_function("request_signer", |b| {
        let cred = Credential::new("access_key_id", "secret_access_key", None);
        let s = RequestSigner::new().with_time(time);

        b.iter(|| {
            let req = ApiRequest::new(Method::GET, "ListUsers")
                .with_query("Limit", "10")
                .with_query("Offset", "20");
            s.sign(req, &cred).expect("must success")
        })
    });

    group.bench_function("request_signer_with_body", |b| {
        let cred = Credential::new(
            "access_key_id",
            "secret_access_key",
            Some("session_token".to_string()),
        );
        let s = RequestSigner::new().with_time(time);
        let body = r#"{"Name":"route","GatewayId":"gw","Priority":1}"#.repeat(32);

        b.iter(|| {
            let req = ApiRequest::new(Method::POST, "CreateRoute").with_body(body.clone());
            s.sign(req, &cred).expect("must success")
        })
    });

    group.bench_function("signer", |b| {
        let signer = Signer::new(
            Context::new(),
            StaticCredentialProvider::new("access_key_id", "secret_access_key"),
            RequestSigner::new().with_time(time),
        );

        b.to_async(&*RUNTIME).iter(|| async {
            signer
                .sign(ApiRequest::new(Method::GET, "ListUsers"))
                .await
                .expect("must success")
        })
    });

    group.finish();
}
