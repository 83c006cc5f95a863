//! Embedded open metadata type vocabulary.
//!
//! The vocabulary lists the entity types the handlers work with, each with
//! its direct supertype, and the relationship types with the entity type
//! expected at each end.

/// Returns the core type vocabulary as a JSON string.
pub fn core_type_vocabulary() -> &'static str {
    r#"{
  "entityTypes": [
    { "name": "Referenceable", "superType": null },
    { "name": "Asset", "superType": "Referenceable" },
    { "name": "ITInfrastructure", "superType": "Asset" },
    { "name": "SoftwareServer", "superType": "ITInfrastructure" },
    { "name": "Location", "superType": "Referenceable" },
    { "name": "UserIdentity", "superType": "Referenceable" },
    { "name": "Connection", "superType": "Referenceable" },

    { "name": "ActorProfile", "superType": "Referenceable" },
    { "name": "Person", "superType": "ActorProfile" },
    { "name": "Team", "superType": "ActorProfile" },
    { "name": "ITProfile", "superType": "ActorProfile" },

    { "name": "Endpoint", "superType": "Referenceable" },

    { "name": "GovernanceDefinition", "superType": "Referenceable" },
    { "name": "GovernanceStrategy", "superType": "GovernanceDefinition" },
    { "name": "Regulation", "superType": "GovernanceDefinition" },
    { "name": "GovernancePrinciple", "superType": "GovernanceDefinition" },
    { "name": "GovernanceObligation", "superType": "GovernanceDefinition" },
    { "name": "GovernanceApproach", "superType": "GovernanceDefinition" },
    { "name": "GovernanceControl", "superType": "GovernanceDefinition" },
    { "name": "GovernanceRule", "superType": "GovernanceControl" },
    { "name": "GovernanceProcess", "superType": "GovernanceControl" },
    { "name": "GovernanceResponsibility", "superType": "GovernanceControl" },
    { "name": "GovernanceProcedure", "superType": "GovernanceControl" },
    { "name": "GovernanceMetric", "superType": "GovernanceControl" },
    { "name": "SecurityGroup", "superType": "GovernanceControl" },
    { "name": "NamingStandardRule", "superType": "GovernanceControl" },

    { "name": "SchemaElement", "superType": "Referenceable" },
    { "name": "SchemaAttribute", "superType": "SchemaElement" },
    { "name": "SchemaType", "superType": "SchemaElement" },
    { "name": "SimpleSchemaType", "superType": "SchemaType" },
    { "name": "PrimitiveSchemaType", "superType": "SimpleSchemaType" },
    { "name": "LiteralSchemaType", "superType": "SimpleSchemaType" },
    { "name": "EnumSchemaType", "superType": "SimpleSchemaType" },
    { "name": "MapSchemaType", "superType": "SchemaType" },
    { "name": "StructSchemaType", "superType": "SchemaType" },
    { "name": "SchemaTypeChoice", "superType": "SchemaType" }
  ],
  "relationshipTypes": [
    { "name": "ProfileLocation", "end1": "ActorProfile", "end2": "Location" },
    { "name": "ProfileIdentity", "end1": "ActorProfile", "end2": "UserIdentity" },
    { "name": "TeamStructure", "end1": "Team", "end2": "Team" },
    { "name": "ITInfrastructureProfile", "end1": "ITInfrastructure", "end2": "ITProfile" },
    { "name": "ServerEndpoint", "end1": "ITInfrastructure", "end2": "Endpoint" },
    { "name": "ConnectionEndpoint", "end1": "Endpoint", "end2": "Connection" },
    { "name": "GovernanceDriverLink", "end1": "GovernanceDefinition", "end2": "GovernanceDefinition" },
    { "name": "GovernancePolicyLink", "end1": "GovernanceDefinition", "end2": "GovernanceDefinition" },
    { "name": "GovernanceControlLink", "end1": "GovernanceControl", "end2": "GovernanceControl" },
    { "name": "GovernanceResponse", "end1": "GovernanceDefinition", "end2": "GovernanceDefinition" },
    { "name": "GovernanceImplementation", "end1": "GovernanceDefinition", "end2": "GovernanceControl" },
    { "name": "GovernedBy", "end1": "GovernanceDefinition", "end2": "Referenceable" },
    { "name": "ImplementationResource", "end1": "GovernanceDefinition", "end2": "Referenceable" },
    { "name": "SchemaAttributeType", "end1": "SchemaAttribute", "end2": "SchemaType" },
    { "name": "NestedSchemaAttribute", "end1": "SchemaAttribute", "end2": "SchemaAttribute" },
    { "name": "AttributeForSchema", "end1": "SchemaType", "end2": "SchemaAttribute" },
    { "name": "SchemaTypeOption", "end1": "SchemaTypeChoice", "end2": "SchemaType" },
    { "name": "MapFromElementType", "end1": "MapSchemaType", "end2": "SchemaType" },
    { "name": "MapToElementType", "end1": "MapSchemaType", "end2": "SchemaType" }
  ]
}"#
}
