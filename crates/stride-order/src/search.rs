use stride_core::entities::Session;

/// Sessions with `energy_burned >= min_energy` whose predicate holds, in
/// input order.
///
/// Accepts owned sessions or an already ordered slice of references.
pub fn filter_sessions<'a, S>(sessions: &'a [S], min_energy: f64) -> Vec<&'a Session>
where
    S: AsRef<Session>,
{
    let matches: Vec<&Session> = sessions
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| s.energy_burned() >= min_energy && s.evaluate_predicate())
        .collect();

    tracing::debug!(
        searched = sessions.len(),
        matched = matches.len(),
        min_energy,
        "search filter applied"
    );
    matches
}
