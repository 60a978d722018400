use crate::core::orchestrator::match_all;
use crate::core::{JobProvider, MemberProvider, ResultSink, RunSummary};
use crate::utils::error::Result;
use crate::utils::validation::{validate_jobs, validate_members};

pub struct MatchEngine<J: JobProvider, M: MemberProvider, S: ResultSink> {
    jobs: J,
    members: M,
    sink: S,
    strict: bool,
}

impl<J: JobProvider, M: MemberProvider, S: ResultSink> MatchEngine<J, M, S> {
    pub fn new(jobs: J, members: M, sink: S) -> Self {
        Self {
            jobs,
            members,
            sink,
            strict: false,
        }
    }

    /// Reject blank titles, locations and names before matching.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Fetching jobs and members...");
        let (jobs, members) =
            tokio::try_join!(self.jobs.fetch_jobs(), self.members.fetch_members())?;
        tracing::info!("Fetched {} jobs and {} members", jobs.len(), members.len());

        if self.strict {
            validate_jobs(&jobs)?;
            validate_members(&members)?;
            tracing::debug!("All records passed strict validation");
        }

        let results = match_all(&members, &jobs);
        let members_with_matches = results.iter().filter(|r| r.has_matches()).count();
        tracing::info!(
            "{} of {} members received at least one recommendation",
            members_with_matches,
            results.len()
        );

        let output = self.sink.emit(&results).await?;
        tracing::debug!("Results written to {}", output);

        Ok(RunSummary {
            jobs: jobs.len(),
            members: members.len(),
            members_with_matches,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JobPosting, PersonProfile, RecommendationResult};
    use crate::utils::error::MatchError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct StaticJobs(Vec<JobPosting>);

    #[async_trait]
    impl JobProvider for StaticJobs {
        async fn fetch_jobs(&self) -> Result<Vec<JobPosting>> {
            Ok(self.0.clone())
        }
    }

    struct StaticMembers(Vec<PersonProfile>);

    #[async_trait]
    impl MemberProvider for StaticMembers {
        async fn fetch_members(&self) -> Result<Vec<PersonProfile>> {
            Ok(self.0.clone())
        }
    }

    struct FailingMembers;

    #[async_trait]
    impl MemberProvider for FailingMembers {
        async fn fetch_members(&self) -> Result<Vec<PersonProfile>> {
            Err(MatchError::Provider {
                source_name: "members".to_string(),
                status: 503,
            })
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        emitted: Arc<Mutex<Vec<RecommendationResult>>>,
    }

    #[async_trait]
    impl ResultSink for MemorySink {
        async fn emit(&self, results: &[RecommendationResult]) -> Result<String> {
            self.emitted.lock().await.extend_from_slice(results);
            Ok("memory".to_string())
        }
    }

    fn jobs() -> StaticJobs {
        StaticJobs(vec![
            JobPosting::new("Backend Engineer", "Berlin"),
            JobPosting::new("Backend Engineer", "Paris"),
        ])
    }

    #[tokio::test]
    async fn test_run_emits_results_and_summary() {
        let sink = MemorySink::default();
        let members = StaticMembers(vec![
            PersonProfile::new("Ana", "I am a backend engineer living in berlin"),
            PersonProfile::new("Ben", "I love painting and hiking"),
        ]);

        let engine = MatchEngine::new(jobs(), members, sink.clone());
        let summary = engine.run().await.unwrap();

        assert_eq!(summary.jobs, 2);
        assert_eq!(summary.members, 2);
        assert_eq!(summary.members_with_matches, 1);
        assert_eq!(summary.output, "memory");

        let emitted = sink.emitted.lock().await;
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].recommended_jobs, vec!["Backend Engineer, Berlin"]);
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated() {
        let sink = MemorySink::default();
        let engine = MatchEngine::new(jobs(), FailingMembers, sink.clone());

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, MatchError::Provider { status: 503, .. }));
        assert!(sink.emitted.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_strict_validation_rejects_blank_name() {
        let sink = MemorySink::default();
        let members = StaticMembers(vec![PersonProfile::new("  ", "engineer")]);

        let engine = MatchEngine::new(jobs(), members, sink.clone()).with_strict_validation(true);
        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, MatchError::InvalidRecord { index: 0, .. }));
        assert!(sink.emitted.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_lenient_mode_accepts_blank_name() {
        let sink = MemorySink::default();
        let members = StaticMembers(vec![PersonProfile::new("", "")]);

        let summary = MatchEngine::new(jobs(), members, sink)
            .run()
            .await
            .unwrap();

        assert_eq!(summary.members_with_matches, 0);
    }
}
