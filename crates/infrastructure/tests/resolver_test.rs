use std::sync::Arc;
use std::time::Duration;
use whoisd_application::ports::{WhoisCachePort, WhoisResolver};
use whoisd_domain::{DialectKind, DomainError, QueryOptions, TldEntry, WhoisQuery};
use whoisd_infrastructure::whois::{
    ResolverConfig, TldTable, WhoisCache, WhoisResolverBuilder, ROOT_WHOIS_SERVER,
};

mod helpers;
use helpers::MockTransport;

fn table() -> TldTable {
    let entries = [
        TldEntry::new("uk", "", "whois.nic.uk"),
        TldEntry::new("co.uk", "", "whois.co-uk.test"),
        TldEntry::new("com", "verisign", "whois.verisign-grs.com"),
        TldEntry::new("de", "formatted", "whois.denic.de")
            .with_options(QueryOptions::new().with(QueryOptions::FORMAT, "-T dn,ace %s")),
        TldEntry::new("cm", "none", ""),
        TldEntry::new("in-addr.arpa", "arpa", ""),
        TldEntry::new("gr", "web", "https://grweb.ics.forth.gr/public/whois"),
    ];
    TldTable::from_entries(&entries).unwrap()
}

fn transport() -> Arc<MockTransport> {
    Arc::new(
        MockTransport::new()
            .with_answer("whois.nic.uk", "uk answer")
            .with_answer("whois.co-uk.test", "co.uk answer")
            .with_answer("whois.verisign-grs.com", "Creation Date: 1995-08-14T04:00:00Z\n")
            .with_answer("whois.denic.de", "de answer")
            .with_answer(ROOT_WHOIS_SERVER, "domain: COM\n")
            .with_answer("whois.backup.test", "backup answer")
            .with_failing_server("whois.down.test"),
    )
}

fn resolver(transport: Arc<MockTransport>) -> Arc<dyn WhoisResolver> {
    WhoisResolverBuilder::new(table())
        .with_transport(transport)
        .build()
}

#[tokio::test]
async fn test_longest_suffix_selects_compound_tld() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let resolution = resolver.whois(&WhoisQuery::new("example.co.uk")).await.unwrap();

    assert_eq!(&*resolution.raw, "co.uk answer");
    assert_eq!(resolution.server.as_deref(), Some("whois.co-uk.test"));
    assert!(!resolution.cache_hit);
}

#[tokio::test]
async fn test_parent_label_used_when_compound_absent() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let resolution = resolver.whois(&WhoisQuery::new("example.org.uk")).await.unwrap();
    assert_eq!(&*resolution.raw, "uk answer");
}

#[tokio::test]
async fn test_bare_tld_goes_to_root_registry() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let resolution = resolver.whois(&WhoisQuery::new(".com")).await.unwrap();

    assert_eq!(&*resolution.raw, "domain: COM\n");
    assert_eq!(transport.sent(), vec![(".com".to_string(), ROOT_WHOIS_SERVER.to_string())]);
}

#[tokio::test]
async fn test_dialects_shape_the_query_line() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    resolver.whois(&WhoisQuery::new("example.com")).await.unwrap();
    resolver.whois(&WhoisQuery::new("example.de")).await.unwrap();

    let sent: Vec<String> = transport.sent().into_iter().map(|(text, _)| text).collect();
    assert_eq!(sent, vec!["=example.com", "-T dn,ace example.de"]);
}

#[tokio::test]
async fn test_unsupported_registries_fail_without_network() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let none = resolver.whois(&WhoisQuery::new("example.cm")).await.unwrap_err();
    let arpa = resolver
        .whois(&WhoisQuery::new("1.0.0.127.in-addr.arpa"))
        .await
        .unwrap_err();
    let web = resolver.whois(&WhoisQuery::new("example.gr")).await.unwrap_err();

    assert_eq!(none, DomainError::NoWhoisServer("example.cm".into()));
    assert!(matches!(arpa, DomainError::NotImplemented(_)));
    assert_eq!(web.referral_url(), Some("https://grweb.ics.forth.gr/public/whois"));
    assert!(none.is_unsupported_registry() && arpa.is_unsupported_registry());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_unmatched_host() {
    let resolver = resolver(transport());
    let err = resolver.whois(&WhoisQuery::new("example.invalid")).await.unwrap_err();
    assert_eq!(err, DomainError::CannotMatchTld("example.invalid".into()));
}

#[tokio::test]
async fn test_explicit_servers_first_success_wins() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let query = WhoisQuery::new("example.com")
        .with_servers(["whois.down.test", "whois.backup.test", "whois.nic.uk"]);
    let resolution = resolver.whois(&query).await.unwrap();

    assert_eq!(&*resolution.raw, "backup answer");
    assert_eq!(resolution.dialect, Some(DialectKind::Plain));
    assert_eq!(
        transport.sent(),
        vec![
            ("example.com".to_string(), "whois.down.test".to_string()),
            ("example.com".to_string(), "whois.backup.test".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_explicit_servers_all_failing() {
    let transport = transport();
    let resolver = resolver(transport.clone());

    let query = WhoisQuery::new("example.com").with_servers(["whois.down.test", "whois.gone.test"]);
    let err = resolver.whois(&query).await.unwrap_err();

    assert_eq!(err, DomainError::NoServerResponded("example.com".into()));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_concurrent_identical_queries_coalesce() {
    let transport = Arc::new(
        MockTransport::new()
            .with_answer("whois.verisign-grs.com", "shared answer")
            .with_delay(Duration::from_millis(100)),
    );
    let resolver = resolver(transport.clone());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let resolver = Arc::clone(&resolver);
        handles.push(tokio::spawn(async move {
            resolver.whois(&WhoisQuery::new("example.com")).await
        }));
    }

    for handle in handles {
        let resolution = handle.await.unwrap().unwrap();
        assert_eq!(&*resolution.raw, "shared answer");
    }
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_cache_round_trip() {
    let transport = transport();
    let cache = Arc::new(WhoisCache::new(Duration::from_secs(60), 1 << 20));
    let resolver = WhoisResolverBuilder::new(table())
        .with_transport(transport.clone())
        .with_cache(cache.clone())
        .build();

    let first = resolver.whois(&WhoisQuery::new("example.com")).await.unwrap();
    let second = resolver.whois(&WhoisQuery::new("example.com")).await.unwrap();

    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.raw, second.raw);
    assert_eq!(transport.calls(), 1);
    assert_eq!(cache.stats().hits, 1);
}

#[tokio::test]
async fn test_errors_are_not_cached() {
    let transport = transport();
    let cache = Arc::new(WhoisCache::new(Duration::from_secs(60), 1 << 20));
    let resolver = WhoisResolverBuilder::new(table())
        .with_transport(transport.clone())
        .with_cache(cache.clone())
        .build();

    let query = WhoisQuery::new("example.com").with_servers(["whois.down.test"]);
    assert!(resolver.whois(&query).await.is_err());
    assert!(resolver.whois(&query).await.is_err());

    assert_eq!(transport.calls(), 2);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_shutdown_flushes_cache() {
    let cache = Arc::new(WhoisCache::new(Duration::from_secs(60), 1 << 20));
    let resolver = WhoisResolverBuilder::new(table())
        .with_transport(transport())
        .with_cache(cache.clone())
        .build();

    resolver.whois(&WhoisQuery::new("example.com")).await.unwrap();
    assert_eq!(cache.len(), 1);

    resolver.shutdown();
    assert!(cache.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fetch_ceiling_bounds_slow_servers() {
    let transport = Arc::new(
        MockTransport::new()
            .with_answer("whois.verisign-grs.com", "too late")
            .with_delay(Duration::from_secs(120)),
    );
    let config = ResolverConfig {
        fetch_ceiling: Duration::from_secs(5),
        ..ResolverConfig::default()
    };
    let resolver = WhoisResolverBuilder::new(table())
        .with_transport(transport)
        .with_config(config)
        .build();

    let err = resolver.whois(&WhoisQuery::new("example.com")).await.unwrap_err();
    assert_eq!(err, DomainError::QueryTimeout("example.com".into()));
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_is_cached_after_caller_gives_up() {
    let transport = Arc::new(
        MockTransport::new()
            .with_answer("whois.verisign-grs.com", "slow answer")
            .with_delay(Duration::from_secs(2)),
    );
    let cache = Arc::new(WhoisCache::new(Duration::from_secs(60), 1 << 20));
    let resolver = WhoisResolverBuilder::new(table())
        .with_transport(transport.clone())
        .with_cache(cache.clone())
        .build();
    let query = WhoisQuery::new("example.com");

    let abandoned = tokio::time::timeout(Duration::from_millis(100), resolver.whois(&query)).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(cache.len(), 1);

    let resolution = resolver.whois(&query).await.unwrap();
    assert!(resolution.cache_hit);
    assert_eq!(&*resolution.raw, "slow answer");
    assert_eq!(transport.calls(), 1);
}
