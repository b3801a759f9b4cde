//! C4 model diagrams: context, container, component, code, and the clean
//! architecture layer view.

use crate::model::{Diagram, Direction, Icon};

pub(super) fn context() -> Diagram {
    let mut diagram = Diagram::new("Samstraumr System Context", Direction::LeftRight);

    diagram.node("users", "Development Teams", Icon::Users);

    diagram.group("Samstraumr Framework", |g| {
        g.node("core", "Samstraumr Core", Icon::Runtime);
        g.node("api", "API", Icon::Runtime);
        g.node("db", "Event Store", Icon::Database);
    });

    diagram.group("External Systems", |g| {
        g.node("vcs", "Version Control", Icon::Server);
        g.node("ci", "CI/CD System", Icon::Server);
        g.node("docs", "Document Repository", Icon::Storage);
    });

    diagram.edge("users", "api");
    diagram.edge("api", "core");
    diagram.edge("core", "db");
    diagram.edge("users", "core");
    diagram.edge("core", "vcs");
    diagram.edge("core", "docs");
    diagram.edge("api", "ci");

    diagram
}

pub(super) fn container() -> Diagram {
    let mut diagram = Diagram::new("Samstraumr Container Diagram", Direction::LeftRight);

    diagram.node("dev", "Developer", Icon::User);

    diagram.group("Samstraumr Framework", |g| {
        g.group("Core Framework", |core| {
            core.node("tubes", "Tubes", Icon::Runtime);
            core.node("components", "Components", Icon::Runtime);
            core.node("identity", "Identity", Icon::Runtime);
        });
        g.group("Orchestration", |orch| {
            orch.node("machine", "Machine", Icon::Runtime);
            orch.node("composite", "Composite", Icon::Runtime);
        });
        g.group("Infrastructure", |infra| {
            infra.node("events", "Event Dispatcher", Icon::Runtime);
            infra.node("db", "Event Store", Icon::Database);
        });
    });

    diagram.group("External Systems", |g| {
        g.node("ci_cd", "CI/CD Pipeline", Icon::Server);
    });

    diagram.edge("dev", "tubes");
    diagram.edge("tubes", "events");
    diagram.edge("dev", "components");
    diagram.edge("components", "machine");
    diagram.edge("machine", "composite");
    diagram.edge("tubes", "identity");
    diagram.edge("components", "identity");
    diagram.edge("composite", "identity");
    diagram.edge("events", "db");
    diagram.edge("machine", "ci_cd");

    diagram
}

pub(super) fn component() -> Diagram {
    let mut diagram = Diagram::new("Samstraumr Component Diagram", Direction::LeftRight);

    diagram.group("Core Domain", |g| {
        g.node("tubes", "Tube", Icon::Runtime);
        g.node("components", "Component", Icon::Runtime);
        g.node("identifiers", "Identity", Icon::Runtime);
        g.node("lifecycle", "Lifecycle", Icon::Runtime);
    });

    diagram.group("Orchestration", |g| {
        g.node("machine", "Machine", Icon::Runtime);
        g.node("composite", "Composite", Icon::Runtime);
        g.node("flow", "DataFlow", Icon::Runtime);
    });

    diagram.group("Infrastructure", |g| {
        g.node("repo", "Repository", Icon::Runtime);
        g.node("events", "EventDispatcher", Icon::Runtime);
        g.node("logging", "Logger", Icon::Runtime);
    });

    diagram.edge("tubes", "identifiers");
    diagram.edge("components", "identifiers");

    diagram.edge("composite", "components");
    diagram.edge("machine", "components");
    diagram.edge("flow", "components");

    diagram.edge("composite", "repo");
    diagram.edge("machine", "repo");

    diagram.edge("events", "logging");
    diagram.edge("events", "repo");

    diagram
}

pub(super) fn code() -> Diagram {
    let mut diagram = Diagram::new("Samstraumr Code Diagram", Direction::TopBottom);

    diagram.group("Domain Model", |g| {
        g.node("tube", "Tube", Icon::Runtime);
        g.node("component", "Component", Icon::Runtime);
        g.node("identity", "Identity", Icon::Runtime);
        g.node("state", "LifecycleState", Icon::Runtime);
    });

    diagram.group("Domain Services", |g| {
        g.node("tube_factory", "TubeFactory", Icon::Runtime);
        g.node("component_factory", "ComponentFactory", Icon::Runtime);
        g.node("machine_factory", "MachineFactory", Icon::Runtime);
        g.node("composite_factory", "CompositeFactory", Icon::Runtime);
    });

    diagram.group("Repositories", |g| {
        g.node("tube_repo", "TubeRepository", Icon::Runtime);
        g.node("component_repo", "ComponentRepository", Icon::Runtime);
        g.node("machine_repo", "MachineRepository", Icon::Runtime);
    });

    diagram.edge("tube_factory", "tube");
    diagram.edge("tube", "tube_repo");
    diagram.edge("component_factory", "component");
    diagram.edge("component", "component_repo");
    diagram.edge("machine_factory", "component");
    diagram.edge("component", "machine_repo");
    diagram.edge("composite_factory", "component");
    diagram.edge("tube", "state");
    diagram.edge("component", "state");
    diagram.edge("tube", "identity");
    diagram.edge("component", "identity");

    diagram
}

pub(super) fn clean_architecture() -> Diagram {
    let mut diagram =
        Diagram::new("Samstraumr Clean Architecture", Direction::TopBottom).with_ortho_edges();

    diagram.group("Core Domain", |g| {
        g.node("entity", "Entities", Icon::Runtime);
    });

    diagram.group("Use Cases", |g| {
        g.node("usecases", "Use Cases", Icon::Runtime);
    });

    diagram.group("Interface Adapters", |g| {
        g.group("Input Adapters", |input| {
            input.node("controllers", "Controllers", Icon::Runtime);
            input.node("presenters", "Presenters", Icon::Runtime);
        });
        g.group("Output Adapters", |output| {
            output.node("gateways", "Gateways", Icon::Runtime);
            output.node("repositories", "Repositories", Icon::Runtime);
        });
    });

    diagram.group("Frameworks & Drivers", |g| {
        g.group("UI", |ui| {
            ui.node("web", "Web UI", Icon::Framework);
            ui.node("cli", "CLI", Icon::Runtime);
        });
        g.group("External Interfaces", |ext| {
            ext.node("db", "Database", Icon::Database);
            ext.node("external_api", "External APIs", Icon::Runtime);
        });
    });

    // Dependency rule: arrows point inward.
    diagram.edge("web", "controllers");
    diagram.edge("cli", "controllers");
    diagram.edge("controllers", "usecases");
    diagram.edge("presenters", "usecases");
    diagram.edge("usecases", "entity");
    diagram.edge("repositories", "db");
    diagram.edge("gateways", "external_api");
    diagram.edge("usecases", "repositories");
    diagram.edge("usecases", "gateways");
    diagram.edge("presenters", "web");

    diagram
}
