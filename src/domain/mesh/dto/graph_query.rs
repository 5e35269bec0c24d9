//! Dependency-graph query descriptor

use crate::api::util::query::{InvalidParam, QueryPairs};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphQuery {
    /// Target namespaces. Exactly one for the single-namespace endpoint;
    /// possibly empty (meaning "all visible") for the multi-namespace one.
    pub namespaces: Vec<String>,
    pub graph_type: Option<String>,
    /// Node grouping kind, e.g. "app" or "version".
    pub group_by: Option<String>,
    pub query_time: Option<i64>,
    pub inject_service_nodes: Option<bool>,
}

impl GraphQuery {
    pub fn for_namespace(namespace: String, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        Self::build(vec![namespace], pairs)
    }

    /// Multi-namespace variant: targets come from the `namespaces` query
    /// parameter, which may repeat and may hold comma-separated lists.
    pub fn for_namespaces(pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        let namespaces = pairs
            .get_all("namespaces")
            .iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self::build(namespaces, pairs)
    }

    fn build(namespaces: Vec<String>, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        Ok(Self {
            namespaces,
            graph_type: pairs.get("graphType").map(str::to_string),
            group_by: pairs.get("groupBy").map(str::to_string),
            query_time: pairs.number("queryTime")?,
            inject_service_nodes: pairs.boolean("injectServiceNodes")?,
        })
    }

    /// Wire parameters for the telemetry backend, names unchanged.
    /// Namespaces travel in the path for the single-namespace endpoint and
    /// are therefore not repeated here.
    pub fn to_wire(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(t) = &self.graph_type {
            params.push(("graphType", t.clone()));
        }
        if let Some(g) = &self.group_by {
            params.push(("groupBy", g.clone()));
        }
        if let Some(t) = self.query_time {
            params.push(("queryTime", t.to_string()));
        }
        if let Some(i) = self.inject_service_nodes {
            params.push(("injectServiceNodes", i.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &str) -> QueryPairs {
        QueryPairs::parse(Some(raw))
    }

    #[test]
    fn single_namespace_from_path() {
        let q = GraphQuery::for_namespace("foo".into(), &pairs("groupBy=app")).unwrap();
        assert_eq!(q.namespaces, vec!["foo"]);
        assert_eq!(q.group_by.as_deref(), Some("app"));
    }

    #[test]
    fn multi_namespace_accepts_commas_and_repeats() {
        let q = GraphQuery::for_namespaces(&pairs("namespaces=a,b&namespaces=c")).unwrap();
        assert_eq!(q.namespaces, vec!["a", "b", "c"]);

        let all = GraphQuery::for_namespaces(&pairs("graphType=versionedApp")).unwrap();
        assert!(all.namespaces.is_empty());
        assert_eq!(all.graph_type.as_deref(), Some("versionedApp"));
    }

    #[test]
    fn inject_service_nodes_must_be_boolean() {
        let q = GraphQuery::for_namespace("foo".into(), &pairs("injectServiceNodes=true")).unwrap();
        assert_eq!(q.inject_service_nodes, Some(true));

        assert!(GraphQuery::for_namespace("foo".into(), &pairs("injectServiceNodes=yes")).is_err());
    }

    #[test]
    fn wire_names_are_preserved() {
        let q = GraphQuery::for_namespace(
            "foo".into(),
            &pairs("graphType=workload&queryTime=1700000000&injectServiceNodes=false"),
        )
        .unwrap();

        assert_eq!(
            q.to_wire(),
            vec![
                ("graphType", "workload".to_string()),
                ("queryTime", "1700000000".to_string()),
                ("injectServiceNodes", "false".to_string()),
            ]
        );
    }
}
