//! Property tests for the wait-until-active loop.

use std::cell::{Cell, RefCell};
use std::net::Ipv4Addr;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;

use launchpad::domain::entities::{
    DropletRecord, DropletSpec, DropletStatus, NetworkAddress, SshKeyRecord,
};
use launchpad::domain::ports::{
    CloudProvider, NonInteractivePrompt, NoopProvisionSink, PublicIpResolver, Sleeper,
};
use launchpad::domain::value_objects::PollPolicy;
use launchpad::{LaunchpadError, LaunchpadResult, ProvisionUseCase};

/// Answers status queries from a script, then `new` forever
struct ScriptedProvider {
    statuses: Vec<DropletStatus>,
    queries: Rc<Cell<u64>>,
}

impl CloudProvider for ScriptedProvider {
    fn list_ssh_keys(&self) -> LaunchpadResult<Vec<SshKeyRecord>> {
        Ok(Vec::new())
    }

    fn create_ssh_key(&self, name: &str, public_key: &str) -> LaunchpadResult<SshKeyRecord> {
        Ok(SshKeyRecord {
            id: 1,
            name: name.to_string(),
            public_key: public_key.to_string(),
            fingerprint: None,
        })
    }

    fn find_droplets_by_name(&self, _name: &str) -> LaunchpadResult<Vec<DropletRecord>> {
        Ok(Vec::new())
    }

    fn create_droplet(&self, spec: &DropletSpec) -> LaunchpadResult<DropletRecord> {
        Ok(droplet(7, &spec.name, DropletStatus::New))
    }

    fn get_droplet(&self, id: u64) -> LaunchpadResult<DropletRecord> {
        let n = self.queries.get();
        self.queries.set(n + 1);
        let status = self
            .statuses
            .get(n as usize)
            .cloned()
            .unwrap_or(DropletStatus::New);
        Ok(droplet(id, "app", status))
    }
}

fn droplet(id: u64, name: &str, status: DropletStatus) -> DropletRecord {
    let ipv4 = if status.is_active() {
        vec![NetworkAddress {
            ip_address: "203.0.113.10".to_string(),
            kind: "public".to_string(),
        }]
    } else {
        Vec::new()
    };
    DropletRecord {
        id,
        name: name.to_string(),
        status,
        region: None,
        size: None,
        image: None,
        ipv4,
    }
}

struct NoIp;

impl PublicIpResolver for NoIp {
    fn resolve(&self) -> LaunchpadResult<Ipv4Addr> {
        Err(LaunchpadError::config("not used"))
    }
}

struct CountingSleeper(Rc<RefCell<Vec<Duration>>>);

impl Sleeper for CountingSleeper {
    fn sleep(&self, duration: Duration) {
        self.0.borrow_mut().push(duration);
    }
}

struct Run {
    outcome: LaunchpadResult<(String, u64)>,
    queries: u64,
    sleeps: Vec<Duration>,
}

fn run(statuses: Vec<DropletStatus>, policy: PollPolicy) -> Run {
    let queries = Rc::new(Cell::new(0));
    let sleeps = Rc::new(RefCell::new(Vec::new()));
    let use_case = ProvisionUseCase::new(
        ScriptedProvider {
            statuses,
            queries: queries.clone(),
        },
        Box::new(NoIp),
        Box::new(NonInteractivePrompt),
        Box::new(CountingSleeper(sleeps.clone())),
    );

    let outcome = use_case.wait_until_active(7, &policy, &NoopProvisionSink);
    let sleeps = sleeps.borrow().clone();
    Run {
        outcome,
        queries: queries.get(),
        sleeps,
    }
}

fn transitional() -> impl Strategy<Value = DropletStatus> {
    prop_oneof![
        Just(DropletStatus::New),
        "[a-z]{3,10}"
            .prop_filter("not a known status", |s| {
                !matches!(
                    s.as_str(),
                    "new" | "active" | "off" | "archive" | "errored" | "error" | "failed"
                )
            })
            .prop_map(DropletStatus::Other),
    ]
}

fn terminal() -> impl Strategy<Value = DropletStatus> {
    prop_oneof![
        Just(DropletStatus::Off),
        Just(DropletStatus::Archive),
        Just(DropletStatus::Failed("errored".to_string())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Polling stops at the first active status, never later.
    #[test]
    fn property_stops_at_first_active(
        pending in proptest::collection::vec(transitional(), 0..12),
        timeout_secs in 0u64..20,
    ) {
        let policy = PollPolicy::new(Duration::from_secs(1), Duration::from_secs(timeout_secs));
        let max = policy.max_attempts();
        let pending_len = pending.len() as u64;

        let mut statuses = pending;
        statuses.push(DropletStatus::Active);
        let r = run(statuses, policy);

        if pending_len < max {
            let (ip, attempts) = r.outcome.unwrap();
            prop_assert_eq!(ip, "203.0.113.10");
            prop_assert_eq!(attempts, pending_len + 1);
            prop_assert_eq!(r.queries, pending_len + 1);
            prop_assert_eq!(r.sleeps.len() as u64, pending_len);
        } else {
            let is_timeout = matches!(r.outcome, Err(LaunchpadError::PollTimeout { .. }));
            prop_assert!(is_timeout);
            prop_assert_eq!(r.queries, max);
        }
    }

    /// PROPERTY: The loop is bounded by the policy even if the droplet never
    /// leaves a transitional state.
    #[test]
    fn property_bounded_by_policy(
        interval_secs in 1u64..10,
        timeout_secs in 0u64..60,
    ) {
        let policy = PollPolicy::new(
            Duration::from_secs(interval_secs),
            Duration::from_secs(timeout_secs),
        );
        let r = run(Vec::new(), policy);

        let is_timeout = matches!(r.outcome, Err(LaunchpadError::PollTimeout { .. }));
        prop_assert!(is_timeout);
        prop_assert_eq!(r.queries, policy.max_attempts());
        prop_assert_eq!(r.sleeps.len() as u64, policy.max_attempts() - 1);
        prop_assert!(r.sleeps.iter().all(|d| *d == policy.interval));
        let slept: Duration = r.sleeps.iter().sum();
        prop_assert!(slept <= policy.timeout);
    }

    /// PROPERTY: A terminal failure status ends polling immediately.
    #[test]
    fn property_terminal_status_ends_polling(
        pending in proptest::collection::vec(transitional(), 0..8),
        failure in terminal(),
    ) {
        let policy = PollPolicy::new(Duration::from_secs(1), Duration::from_secs(60));
        let pending_len = pending.len() as u64;

        let mut statuses = pending;
        statuses.push(failure.clone());
        statuses.push(DropletStatus::Active);
        let r = run(statuses, policy);

        match r.outcome {
            Err(LaunchpadError::InstanceFailed { id, status }) => {
                prop_assert_eq!(id, 7);
                prop_assert_eq!(status, failure.to_string());
            }
            other => prop_assert!(false, "expected InstanceFailed, got {:?}", other),
        }
        prop_assert_eq!(r.queries, pending_len + 1);
    }
}
