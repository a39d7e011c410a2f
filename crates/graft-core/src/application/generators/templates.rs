//! Built-in skeleton templates.
//!
//! Contents are rendered through [`crate::domain::render`], plain `{{ key }}`
//! substitution. Namespaces are injected in source form (backslashes), the
//! way the generated host-framework files expect them.

/// Root declaration class for the extension package.
pub const BUNDLE_CLASS: &str = r#"<?php

namespace {{ namespace }};

use Symfony\Component\HttpKernel\Bundle\Bundle;

/**
 * This file has been generated by the graft command.
 */
class {{ class }} extends Bundle
{
}
"#;

/// Package descriptor written next to the root declaration.
pub const PACKAGE_DESCRIPTOR: &str = r#"{
    "name": "{{ slug }}",
    "description": "Application extension of {{ package }}",
    "type": "symfony-bundle",
    "autoload": {
        "psr-4": {
            "{{ autoload }}": ""
        }
    }
}
"#;

/// Extension stub for a mapped entity or document.
pub const EXTENSION_CLASS: &str = r#"<?php

namespace {{ namespace }};

use {{ base }} as Base{{ name }};

/**
 * This file has been generated by the graft command, edit it as needed.
 */
class {{ name }} extends Base{{ name }}
{
    /**
     * @var int
     */
    protected $id;

    public function getId()
    {
        return $this->id;
    }
}
"#;

/// Extension stub for a repository class.
pub const REPOSITORY_CLASS: &str = r#"<?php

namespace {{ namespace }};

use {{ base }} as Base{{ name }};

class {{ name }} extends Base{{ name }}
{
}
"#;

/// Serializer descriptor for relational entities.
pub const ENTITY_SERIALIZER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<serializer>
    <class name="{{ namespace }}\Entity\{{ name }}" exclusion-policy="all" xml-root-name="{{ root_name }}" exclude="true"/>
</serializer>
"#;

/// Serializer descriptor for document-store and content-repository types.
pub const DOCUMENT_SERIALIZER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<serializer>
    <class name="{{ namespace }}\Document\{{ name }}" exclusion-policy="all" xml-root-name="{{ root_name }}" exclude="true"/>
</serializer>
"#;
