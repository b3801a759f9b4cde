//! Ports-and-adapters diagrams for the Clean Architecture implementation.

use crate::config::DetailLevel;
use crate::model::{Diagram, Direction, Icon};

pub(super) fn ports_component() -> Diagram {
    let mut diagram = Diagram::new(
        "Samstraumr Port Interfaces Component Diagram",
        Direction::TopBottom,
    );

    diagram.group("Domain Layer", |g| {
        g.node("component", "Component", Icon::Runtime);
        g.node("identity", "Identity", Icon::Runtime);
        g.node("state", "State", Icon::Runtime);
        g.node("machine", "Machine", Icon::Runtime);
        g.node("composite", "Composite", Icon::Runtime);
        g.node("event", "DomainEvent", Icon::Runtime);
    });

    diagram.group("Application Layer", |g| {
        g.group("Services", |svc| {
            svc.node("component_svc", "ComponentService", Icon::Runtime);
            svc.node("notification_svc", "NotificationService", Icon::Runtime);
            svc.node("cache_svc", "CacheService", Icon::Runtime);
            svc.node("file_svc", "FileSystemService", Icon::Runtime);
            svc.node("validation_svc", "ValidationService", Icon::Runtime);
            svc.node("persistence_svc", "PersistenceService", Icon::Runtime);
            svc.node("event_svc", "EventService", Icon::Runtime);
            svc.node("security_svc", "SecurityService", Icon::Runtime);
            svc.node("messaging_svc", "MessagingService", Icon::Runtime);
            svc.node("task_svc", "TaskExecutionService", Icon::Runtime);
            svc.node("config_svc", "ConfigurationService", Icon::Runtime);
        });
        g.group("Port Interfaces", |port| {
            port.node("notification_port", "NotificationPort", Icon::Runtime);
            port.node("cache_port", "CachePort", Icon::Runtime);
            port.node("file_port", "FileSystemPort", Icon::Runtime);
            port.node("validation_port", "ValidationPort", Icon::Runtime);
            port.node("persistence_port", "PersistencePort", Icon::Runtime);
            port.node("event_pub_port", "EventPublisherPort", Icon::Runtime);
            port.node("dataflow_port", "DataFlowEventPort", Icon::Runtime);
            port.node("security_port", "SecurityPort", Icon::Runtime);
            port.node("messaging_port", "MessagingPort", Icon::Runtime);
            port.node("task_port", "TaskExecutionPort", Icon::Runtime);
            port.node("config_port", "ConfigurationPort", Icon::Runtime);
            port.node("template_port", "TemplatePort", Icon::Runtime);
            port.node("storage_port", "StoragePort", Icon::Runtime);
            port.node("comp_repo_port", "ComponentRepository", Icon::Runtime);
        });
    });

    diagram.group("Infrastructure Layer", |g| {
        g.group("Adapters", |adapter| {
            adapter.node("notification_adapter", "NotificationAdapter", Icon::Runtime);
            adapter.node("cache_adapter", "InMemoryCacheAdapter", Icon::Runtime);
            adapter.node("file_adapter", "StandardFileSystemAdapter", Icon::Runtime);
            adapter.node("validation_adapter", "ValidationAdapter", Icon::Runtime);
            adapter.node("persistence_adapter", "InMemoryPersistenceAdapter", Icon::Runtime);
            adapter.node("event_adapter", "EventPublisherAdapter", Icon::Runtime);
            adapter.node("event_dispatcher", "InMemoryEventDispatcher", Icon::Runtime);
            adapter.node("security_adapter", "SecurityAdapter", Icon::Runtime);
            adapter.node("messaging_adapter", "InMemoryMessagingAdapter", Icon::Runtime);
            adapter.node("task_adapter", "ThreadPoolTaskExecutionAdapter", Icon::Runtime);
            adapter.node("config_adapter", "ConfigurationAdapter", Icon::Runtime);
            adapter.node("template_adapter", "FreemarkerTemplateAdapter", Icon::Runtime);
            adapter.node("storage_adapter", "InMemoryStorageAdapter", Icon::Runtime);
            adapter.node("comp_repo_adapter", "InMemoryComponentRepository", Icon::Runtime);
        });
    });

    diagram.group("External Systems", |g| {
        g.group("External Resources", |ext| {
            ext.node("database", "Database", Icon::Database);
            ext.node("file_system", "File System", Icon::Storage);
            ext.node("email_server", "Email Server", Icon::Server);
            ext.node("sms_gateway", "SMS Gateway", Icon::Server);
            ext.node("message_bus", "Message Bus", Icon::Queue);
            ext.node("monitoring", "Monitoring", Icon::Monitoring);
        });
    });

    // Domain layer relationships.
    diagram.edge("component", "identity");
    diagram.edge("component", "state");
    diagram.edge("machine", "component");
    diagram.edge("composite", "component");

    // Services to the domain.
    diagram.edge("component_svc", "component");
    diagram.edge("component_svc", "machine");
    diagram.edge("component_svc", "composite");

    // Services to their ports.
    diagram.edge("notification_svc", "notification_port");
    diagram.edge("cache_svc", "cache_port");
    diagram.edge("file_svc", "file_port");
    diagram.edge("validation_svc", "validation_port");
    diagram.edge("persistence_svc", "persistence_port");
    diagram.edge("event_svc", "event_pub_port");
    diagram.edge("event_svc", "dataflow_port");
    diagram.edge("security_svc", "security_port");
    diagram.edge("messaging_svc", "messaging_port");
    diagram.edge("task_svc", "task_port");
    diagram.edge("config_svc", "config_port");

    // Adapters implement the ports.
    diagram.edge("notification_adapter", "notification_port");
    diagram.edge("cache_adapter", "cache_port");
    diagram.edge("file_adapter", "file_port");
    diagram.edge("validation_adapter", "validation_port");
    diagram.edge("persistence_adapter", "persistence_port");
    diagram.edge("event_adapter", "event_pub_port");
    diagram.edge("event_dispatcher", "dataflow_port");
    diagram.edge("security_adapter", "security_port");
    diagram.edge("messaging_adapter", "messaging_port");
    diagram.edge("task_adapter", "task_port");
    diagram.edge("config_adapter", "config_port");
    diagram.edge("template_adapter", "template_port");
    diagram.edge("storage_adapter", "storage_port");
    diagram.edge("comp_repo_adapter", "comp_repo_port");

    // Adapters to external resources.
    diagram.edge("notification_adapter", "email_server");
    diagram.edge("notification_adapter", "sms_gateway");
    diagram.edge("file_adapter", "file_system");
    diagram.edge("persistence_adapter", "database");
    diagram.edge("event_adapter", "message_bus");
    diagram.edge("event_dispatcher", "message_bus");

    diagram
}

pub(super) fn ports_integration() -> Diagram {
    let mut diagram = Diagram::new(
        "Samstraumr Port Integration Patterns",
        Direction::TopBottom,
    );

    diagram.node("notification_port", "NotificationPort", Icon::Runtime);
    diagram.node("cache_port", "CachePort", Icon::Runtime);
    diagram.node("file_port", "FileSystemPort", Icon::Runtime);
    diagram.node("validation_port", "ValidationPort", Icon::Runtime);
    diagram.node("persistence_port", "PersistencePort", Icon::Runtime);
    diagram.node("event_pub_port", "EventPublisherPort", Icon::Runtime);
    diagram.node("security_port", "SecurityPort", Icon::Runtime);

    diagram.group("Integration Services", |g| {
        g.node("cache_file_svc", "CachingFileService", Icon::Runtime);
        g.node("event_notif_svc", "EventNotificationService", Icon::Runtime);
        g.node("validation_persist_svc", "ValidationPersistenceService", Icon::Runtime);
        g.node("security_file_svc", "SecureFileService", Icon::Runtime);
    });

    // Cache + FileSystem.
    diagram.edge("cache_port", "cache_file_svc");
    diagram.edge("file_port", "cache_file_svc");

    // Event + Notification.
    diagram.edge("event_pub_port", "event_notif_svc");
    diagram.edge("event_notif_svc", "notification_port");

    // Validation + Persistence.
    diagram.edge("validation_port", "validation_persist_svc");
    diagram.edge("validation_persist_svc", "persistence_port");

    // Security + FileSystem.
    diagram.edge("security_port", "security_file_svc");
    diagram.edge("security_file_svc", "file_port");

    diagram
}

pub(super) fn detailed_ports(detail: DetailLevel) -> Diagram {
    let mut diagram = Diagram::new(
        "Samstraumr Detailed Port Interfaces",
        Direction::TopBottom,
    );

    diagram.group("Core Port Interfaces", |g| {
        g.group("NotificationPort", |port| {
            port.node("notification", "NotificationPort", Icon::Runtime);
            port.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("notification_send", "send()", Icon::Runtime);
                m.node("notification_send_batch", "sendBatch()", Icon::Runtime);
                m.node("notification_send_async", "sendAsync()", Icon::Runtime);
                m.node("notification_register", "register()", Icon::Runtime);
                m.node("notification_check_status", "checkStatus()", Icon::Runtime);
            });
        });

        g.group("CachePort", |port| {
            port.node("cache", "CachePort", Icon::Runtime);
            port.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("cache_get", "get()", Icon::Runtime);
                m.node("cache_put", "put()", Icon::Runtime);
                m.node("cache_remove", "remove()", Icon::Runtime);
                m.node("cache_clear", "clear()", Icon::Runtime);
                m.node("cache_contains", "contains()", Icon::Runtime);
            });
        });

        g.group("FileSystemPort", |port| {
            port.node("file_system", "FileSystemPort", Icon::Runtime);
            port.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("file_read", "readFile()", Icon::Runtime);
                m.node("file_write", "writeFile()", Icon::Runtime);
                m.node("file_delete", "deleteFile()", Icon::Runtime);
                m.node("file_list", "listFiles()", Icon::Runtime);
                m.node("file_exists", "fileExists()", Icon::Runtime);
            });
        });

        g.group("ValidationPort", |port| {
            port.node("validation", "ValidationPort", Icon::Runtime);
            port.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("validation_validate", "validate()", Icon::Runtime);
                m.node("validation_validate_all", "validateAll()", Icon::Runtime);
                m.node("validation_get_violations", "getViolations()", Icon::Runtime);
                m.node("validation_is_valid", "isValid()", Icon::Runtime);
            });
        });

        g.group("PersistencePort", |port| {
            port.node("persistence", "PersistencePort", Icon::Runtime);
            port.directed_group("Methods", Direction::LeftRight, |m| {
                m.node("persistence_save", "save()", Icon::Runtime);
                m.node("persistence_find", "find()", Icon::Runtime);
                m.node("persistence_delete", "delete()", Icon::Runtime);
                m.node("persistence_query", "query()", Icon::Runtime);
                m.node("persistence_transaction", "transaction()", Icon::Runtime);
            });
        });
    });

    // Implementation relationships only appear at high detail.
    if detail == DetailLevel::High {
        diagram.group("Standard Implementations", |g| {
            g.node("notif_impl", "NotificationAdapter", Icon::Runtime);
            g.node("cache_impl", "InMemoryCacheAdapter", Icon::Runtime);
            g.node("file_impl", "StandardFileSystemAdapter", Icon::Runtime);
            g.node("validation_impl", "ValidationAdapter", Icon::Runtime);
            g.node("persistence_impl", "InMemoryPersistenceAdapter", Icon::Runtime);
        });

        diagram.edge("notif_impl", "notification");
        diagram.edge("cache_impl", "cache");
        diagram.edge("file_impl", "file_system");
        diagram.edge("validation_impl", "validation");
        diagram.edge("persistence_impl", "persistence");
    }

    diagram
}

pub(super) fn clean_architecture_ports() -> Diagram {
    let mut diagram = Diagram::new(
        "Samstraumr Clean Architecture with Ports and Adapters",
        Direction::TopBottom,
    );

    diagram.group("Core Domain Layer", |g| {
        g.node("entities", "Domain Entities", Icon::Runtime);
        g.node("value_objects", "Value Objects", Icon::Runtime);
        g.node("domain_services", "Domain Services", Icon::Runtime);
    });

    diagram.group("Application Layer", |g| {
        g.node("use_cases", "Use Cases", Icon::Runtime);

        g.directed_group("Input Ports", Direction::TopBottom, |port| {
            port.node("component_port", "ComponentPort", Icon::Runtime);
            port.node("machine_port", "MachinePort", Icon::Runtime);
            port.node("composite_port", "CompositePort", Icon::Runtime);
        });

        g.directed_group("Output Ports", Direction::TopBottom, |port| {
            port.node("persistence_port", "PersistencePort", Icon::Runtime);
            port.node("notification_port", "NotificationPort", Icon::Runtime);
            port.node("event_port", "EventPublisherPort", Icon::Runtime);
            port.node("file_port", "FileSystemPort", Icon::Runtime);
            port.node("cache_port", "CachePort", Icon::Runtime);
        });
    });

    diagram.group("Adapter Layer", |g| {
        g.group("Input Adapters", |adapter| {
            adapter.node("rest_adapter", "REST Adapter", Icon::Runtime);
            adapter.node("cli_adapter", "CLI Adapter", Icon::Runtime);
            adapter.node("messaging_adapter", "Messaging Adapter", Icon::Runtime);
        });
        g.group("Output Adapters", |adapter| {
            adapter.node("persistence_adapter", "PersistenceAdapter", Icon::Runtime);
            adapter.node("notification_adapter", "NotificationAdapter", Icon::Runtime);
            adapter.node("event_adapter", "EventAdapter", Icon::Runtime);
            adapter.node("file_adapter", "FileSystemAdapter", Icon::Runtime);
            adapter.node("cache_adapter", "CacheAdapter", Icon::Runtime);
        });
    });

    diagram.group("Infrastructure Layer", |g| {
        g.node("rest_framework", "Spring Framework", Icon::Framework);
        g.node("database", "PostgreSQL", Icon::Database);
        g.node("file_system", "File System", Icon::Storage);
        g.node("message_broker", "Message Broker", Icon::Queue);
    });

    // Domain relationships.
    diagram.edge("entities", "value_objects");
    diagram.edge("domain_services", "entities");

    // Application layer.
    diagram.edge("use_cases", "domain_services");
    diagram.edge("use_cases", "entities");

    // Input ports drive the use cases.
    diagram.edge("component_port", "use_cases");
    diagram.edge("machine_port", "use_cases");
    diagram.edge("composite_port", "use_cases");

    // Use cases depend on the output ports.
    diagram.edge("use_cases", "persistence_port");
    diagram.edge("use_cases", "notification_port");
    diagram.edge("use_cases", "event_port");
    diagram.edge("use_cases", "file_port");
    diagram.edge("use_cases", "cache_port");

    // Input adapters call the input ports.
    diagram.edge("rest_adapter", "component_port");
    diagram.edge("cli_adapter", "component_port");
    diagram.edge("messaging_adapter", "machine_port");

    // Output adapters implement the output ports.
    diagram.edge("persistence_adapter", "persistence_port");
    diagram.edge("notification_adapter", "notification_port");
    diagram.edge("event_adapter", "event_port");
    diagram.edge("file_adapter", "file_port");
    diagram.edge("cache_adapter", "cache_port");

    // Adapters to infrastructure.
    diagram.edge("rest_adapter", "rest_framework");
    diagram.edge("persistence_adapter", "database");
    diagram.edge("file_adapter", "file_system");
    diagram.edge("event_adapter", "message_broker");
    diagram.edge("notification_adapter", "message_broker");

    diagram
}
