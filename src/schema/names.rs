//! Property, entity type and relationship type names used on the wire.

/// Entity type names.
pub mod types {
    pub const REFERENCEABLE: &str = "Referenceable";
    pub const ASSET: &str = "Asset";
    pub const IT_INFRASTRUCTURE: &str = "ITInfrastructure";
    pub const SOFTWARE_SERVER: &str = "SoftwareServer";
    pub const LOCATION: &str = "Location";
    pub const USER_IDENTITY: &str = "UserIdentity";
    pub const CONNECTION: &str = "Connection";

    pub const ACTOR_PROFILE: &str = "ActorProfile";
    pub const PERSON: &str = "Person";
    pub const TEAM: &str = "Team";
    pub const IT_PROFILE: &str = "ITProfile";

    pub const ENDPOINT: &str = "Endpoint";

    pub const GOVERNANCE_DEFINITION: &str = "GovernanceDefinition";
    pub const GOVERNANCE_STRATEGY: &str = "GovernanceStrategy";
    pub const REGULATION: &str = "Regulation";
    pub const GOVERNANCE_PRINCIPLE: &str = "GovernancePrinciple";
    pub const GOVERNANCE_OBLIGATION: &str = "GovernanceObligation";
    pub const GOVERNANCE_APPROACH: &str = "GovernanceApproach";
    pub const GOVERNANCE_CONTROL: &str = "GovernanceControl";
    pub const GOVERNANCE_RULE: &str = "GovernanceRule";
    pub const GOVERNANCE_PROCESS: &str = "GovernanceProcess";
    pub const GOVERNANCE_RESPONSIBILITY: &str = "GovernanceResponsibility";
    pub const GOVERNANCE_PROCEDURE: &str = "GovernanceProcedure";
    pub const GOVERNANCE_METRIC: &str = "GovernanceMetric";
    pub const SECURITY_GROUP: &str = "SecurityGroup";
    pub const NAMING_STANDARD_RULE: &str = "NamingStandardRule";

    pub const SCHEMA_ELEMENT: &str = "SchemaElement";
    pub const SCHEMA_ATTRIBUTE: &str = "SchemaAttribute";
    pub const SCHEMA_TYPE: &str = "SchemaType";
    pub const SIMPLE_SCHEMA_TYPE: &str = "SimpleSchemaType";
    pub const PRIMITIVE_SCHEMA_TYPE: &str = "PrimitiveSchemaType";
    pub const LITERAL_SCHEMA_TYPE: &str = "LiteralSchemaType";
    pub const ENUM_SCHEMA_TYPE: &str = "EnumSchemaType";
    pub const MAP_SCHEMA_TYPE: &str = "MapSchemaType";
    pub const STRUCT_SCHEMA_TYPE: &str = "StructSchemaType";
    pub const SCHEMA_TYPE_CHOICE: &str = "SchemaTypeChoice";
}

/// Relationship type names.
pub mod relationships {
    pub const PROFILE_LOCATION: &str = "ProfileLocation";
    pub const PROFILE_IDENTITY: &str = "ProfileIdentity";
    pub const TEAM_STRUCTURE: &str = "TeamStructure";
    pub const IT_INFRASTRUCTURE_PROFILE: &str = "ITInfrastructureProfile";
    pub const SERVER_ENDPOINT: &str = "ServerEndpoint";
    pub const CONNECTION_ENDPOINT: &str = "ConnectionEndpoint";
    pub const GOVERNANCE_DRIVER_LINK: &str = "GovernanceDriverLink";
    pub const GOVERNANCE_POLICY_LINK: &str = "GovernancePolicyLink";
    pub const GOVERNANCE_CONTROL_LINK: &str = "GovernanceControlLink";
    pub const GOVERNANCE_RESPONSE: &str = "GovernanceResponse";
    pub const GOVERNANCE_IMPLEMENTATION: &str = "GovernanceImplementation";
    pub const GOVERNED_BY: &str = "GovernedBy";
    pub const IMPLEMENTATION_RESOURCE: &str = "ImplementationResource";
    pub const SCHEMA_ATTRIBUTE_TYPE: &str = "SchemaAttributeType";
    pub const NESTED_SCHEMA_ATTRIBUTE: &str = "NestedSchemaAttribute";
    pub const ATTRIBUTE_FOR_SCHEMA: &str = "AttributeForSchema";
    pub const SCHEMA_TYPE_OPTION: &str = "SchemaTypeOption";
    pub const MAP_FROM_ELEMENT_TYPE: &str = "MapFromElementType";
    pub const MAP_TO_ELEMENT_TYPE: &str = "MapToElementType";
}

/// Property names.
pub mod properties {
    pub const QUALIFIED_NAME: &str = "qualifiedName";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
    pub const EXTENDED_PROPERTIES: &str = "extendedProperties";

    pub const COURTESY_TITLE: &str = "courtesyTitle";
    pub const INITIALS: &str = "initials";
    pub const GIVEN_NAMES: &str = "givenNames";
    pub const SURNAME: &str = "surname";
    pub const FULL_NAME: &str = "fullName";
    pub const PRONOUNS: &str = "pronouns";
    pub const JOB_TITLE: &str = "jobTitle";
    pub const EMPLOYEE_NUMBER: &str = "employeeNumber";
    pub const EMPLOYEE_TYPE: &str = "employeeType";
    pub const PREFERRED_LANGUAGE: &str = "preferredLanguage";
    pub const RESIDENT_COUNTRY: &str = "residentCountry";
    pub const TIME_ZONE: &str = "timeZone";
    pub const IS_PUBLIC: &str = "isPublic";
    pub const TEAM_TYPE: &str = "teamType";
    pub const IDENTIFIER: &str = "identifier";

    pub const NETWORK_ADDRESS: &str = "networkAddress";
    pub const PROTOCOL: &str = "protocol";
    pub const ENCRYPTION_METHOD: &str = "encryptionMethod";

    pub const TITLE: &str = "title";
    pub const SUMMARY: &str = "summary";
    pub const SCOPE: &str = "scope";
    pub const DOMAIN_IDENTIFIER: &str = "domainIdentifier";
    pub const IMPORTANCE: &str = "importance";
    pub const IMPLICATIONS: &str = "implications";
    pub const OUTCOMES: &str = "outcomes";
    pub const RESULTS: &str = "results";
    pub const BUSINESS_IMPERATIVES: &str = "businessImperatives";
    pub const SOURCE: &str = "source";
    pub const REGULATORS: &str = "regulators";
    pub const IMPLEMENTATION_DESCRIPTION: &str = "implementationDescription";
    pub const MEASUREMENT: &str = "measurement";
    pub const TARGET: &str = "target";
    pub const DISTINGUISHED_NAME: &str = "distinguishedName";
    pub const NAME_PATTERNS: &str = "namePatterns";

    pub const POSITION: &str = "position";
    pub const MIN_CARDINALITY: &str = "minCardinality";
    pub const MAX_CARDINALITY: &str = "maxCardinality";
    pub const ALLOWS_DUPLICATE_VALUES: &str = "allowsDuplicateValues";
    pub const ORDERED_VALUES: &str = "orderedValues";
    pub const DEFAULT_VALUE_OVERRIDE: &str = "defaultValueOverride";
    pub const IS_NULLABLE: &str = "isNullable";
    pub const MINIMUM_LENGTH: &str = "minimumLength";
    pub const LENGTH: &str = "length";
    pub const PRECISION: &str = "precision";
    pub const NATIVE_CLASS: &str = "nativeClass";
    pub const ALIASES: &str = "aliases";

    pub const VERSION_NUMBER: &str = "versionNumber";
    pub const AUTHOR: &str = "author";
    pub const USAGE: &str = "usage";
    pub const ENCODING_STANDARD: &str = "encodingStandard";
    pub const NAMESPACE: &str = "namespace";
    pub const IS_DEPRECATED: &str = "isDeprecated";
    pub const DATA_TYPE: &str = "dataType";
    pub const DEFAULT_VALUE: &str = "defaultValue";
    pub const FIXED_VALUE: &str = "fixedValue";

    pub const ASSOCIATION_TYPE: &str = "associationType";
    pub const ROLE_TYPE_NAME: &str = "roleTypeName";
    pub const DELEGATION_ESCALATION_AUTHORITY: &str = "delegationEscalationAuthority";
    pub const RATIONALE: &str = "rationale";
}
