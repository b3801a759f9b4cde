//! Catalog of diagram kinds.
//!
//! Every diagram this tool can produce is declared here, one builder per
//! kind. Builders are pure: they assemble a [`Diagram`] tree and never touch
//! the filesystem or the rendering pipeline. The node, group, and edge sets
//! are fixed per kind; the only runtime-conditional content is the
//! high-detail branch of the detailed-ports diagram.

mod architecture;
mod ports;

use std::fmt::{self, Display};

use crate::config::DetailLevel;
use crate::model::Diagram;

/// C4-style architecture diagram kinds, in batch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchitectureKind {
    Context,
    Container,
    Component,
    Code,
    CleanArchitecture,
}

impl ArchitectureKind {
    /// Every kind, in the order the batch runner generates them.
    pub const ALL: [ArchitectureKind; 5] = [
        ArchitectureKind::Context,
        ArchitectureKind::Container,
        ArchitectureKind::Component,
        ArchitectureKind::Code,
        ArchitectureKind::CleanArchitecture,
    ];

    /// Build the diagram specification for this kind.
    pub fn build(self) -> Diagram {
        match self {
            ArchitectureKind::Context => architecture::context(),
            ArchitectureKind::Container => architecture::container(),
            ArchitectureKind::Component => architecture::component(),
            ArchitectureKind::Code => architecture::code(),
            ArchitectureKind::CleanArchitecture => architecture::clean_architecture(),
        }
    }

    /// Output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            ArchitectureKind::Context => "samstraumr_context_diagram",
            ArchitectureKind::Container => "samstraumr_container_diagram",
            ArchitectureKind::Component => "samstraumr_component_diagram",
            ArchitectureKind::Code => "samstraumr_code_diagram",
            ArchitectureKind::CleanArchitecture => "samstraumr_clean_architecture_diagram",
        }
    }
}

impl Display for ArchitectureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArchitectureKind::Context => "context",
            ArchitectureKind::Container => "container",
            ArchitectureKind::Component => "component",
            ArchitectureKind::Code => "code",
            ArchitectureKind::CleanArchitecture => "clean-architecture",
        };
        f.write_str(s)
    }
}

/// Port-interface diagram kinds, in batch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    Component,
    Integration,
    Detailed,
    CleanArchitecture,
}

impl PortKind {
    /// Every kind, in the order the batch runner generates them.
    pub const ALL: [PortKind; 4] = [
        PortKind::Component,
        PortKind::Integration,
        PortKind::Detailed,
        PortKind::CleanArchitecture,
    ];

    /// Build the diagram specification for this kind.
    ///
    /// `detail` only influences [`PortKind::Detailed`]; the other kinds
    /// ignore it.
    pub fn build(self, detail: DetailLevel) -> Diagram {
        match self {
            PortKind::Component => ports::ports_component(),
            PortKind::Integration => ports::ports_integration(),
            PortKind::Detailed => ports::detailed_ports(detail),
            PortKind::CleanArchitecture => ports::clean_architecture_ports(),
        }
    }

    /// Output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            PortKind::Component => "samstraumr_ports_component_diagram",
            PortKind::Integration => "samstraumr_ports_integration_diagram",
            PortKind::Detailed => "samstraumr_detailed_ports_diagram",
            PortKind::CleanArchitecture => "samstraumr_clean_arch_ports_diagram",
        }
    }
}

impl Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortKind::Component => "ports-component",
            PortKind::Integration => "ports-integration",
            PortKind::Detailed => "detailed-ports",
            PortKind::CleanArchitecture => "clean-architecture-ports",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::Diagram;

    /// Every edge endpoint must name a node declared in the same diagram.
    fn assert_edges_resolve(diagram: &Diagram) {
        let keys: HashSet<&str> = diagram.nodes().iter().map(|n| n.key()).collect();
        for edge in diagram.edges() {
            assert!(
                keys.contains(edge.source()),
                "dangling edge source `{}` in `{}`",
                edge.source(),
                diagram.title()
            );
            assert!(
                keys.contains(edge.target()),
                "dangling edge target `{}` in `{}`",
                edge.target(),
                diagram.title()
            );
        }
    }

    fn assert_keys_unique(diagram: &Diagram) {
        let nodes = diagram.nodes();
        let keys: HashSet<&str> = nodes.iter().map(|n| n.key()).collect();
        assert_eq!(keys.len(), nodes.len(), "duplicate key in `{}`", diagram.title());
    }

    #[test]
    fn architecture_edges_reference_declared_nodes() {
        for kind in ArchitectureKind::ALL {
            let diagram = kind.build();
            assert_edges_resolve(&diagram);
            assert_keys_unique(&diagram);
        }
    }

    #[test]
    fn port_edges_reference_declared_nodes() {
        for detail in [DetailLevel::Low, DetailLevel::Medium, DetailLevel::High] {
            for kind in PortKind::ALL {
                let diagram = kind.build(detail);
                assert_edges_resolve(&diagram);
                assert_keys_unique(&diagram);
            }
        }
    }

    #[test]
    fn batch_order_is_fixed() {
        let architecture: Vec<String> =
            ArchitectureKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            architecture,
            vec!["context", "container", "component", "code", "clean-architecture"]
        );

        let ports: Vec<String> = PortKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            ports,
            vec![
                "ports-component",
                "ports-integration",
                "detailed-ports",
                "clean-architecture-ports"
            ]
        );
    }

    #[test]
    fn file_stems_follow_the_project_naming_scheme() {
        for kind in ArchitectureKind::ALL {
            assert!(kind.file_stem().starts_with("samstraumr_"));
            assert!(kind.file_stem().ends_with("_diagram"));
        }
        for kind in PortKind::ALL {
            assert!(kind.file_stem().starts_with("samstraumr_"));
            assert!(kind.file_stem().ends_with("_diagram"));
        }
    }

    #[test]
    fn context_diagram_structure() {
        let diagram = ArchitectureKind::Context.build();
        assert_eq!(diagram.title(), "Samstraumr System Context");
        assert_eq!(diagram.nodes().len(), 7);
        assert_eq!(diagram.edges().len(), 7);
        assert!(diagram.group_named("Samstraumr Framework").is_some());
        assert!(diagram.group_named("External Systems").is_some());
    }

    #[test]
    fn clean_architecture_uses_orthogonal_routing() {
        let diagram = ArchitectureKind::CleanArchitecture.build();
        assert!(diagram.ortho_edges());
        // Nested adapter groups sit inside the interface-adapter layer.
        assert!(diagram.group_named("Input Adapters").is_some());
        assert!(diagram.group_named("Output Adapters").is_some());
    }

    #[test]
    fn high_detail_adds_standard_implementations() {
        let medium = PortKind::Detailed.build(DetailLevel::Medium);
        assert!(medium.group_named("Standard Implementations").is_none());

        let low = PortKind::Detailed.build(DetailLevel::Low);
        assert!(low.group_named("Standard Implementations").is_none());

        let high = PortKind::Detailed.build(DetailLevel::High);
        let group = high
            .group_named("Standard Implementations")
            .expect("high detail adds the implementation group");
        assert_eq!(group.elements().len(), 5);
        // The five implementation edges only exist at high detail.
        assert_eq!(high.edges().len(), medium.edges().len() + 5);
    }

    #[test]
    fn detail_level_only_affects_the_detailed_diagram() {
        for kind in [PortKind::Component, PortKind::Integration, PortKind::CleanArchitecture] {
            let low = kind.build(DetailLevel::Low);
            let high = kind.build(DetailLevel::High);
            assert_eq!(low.nodes().len(), high.nodes().len());
            assert_eq!(low.edges().len(), high.edges().len());
        }
    }
}
